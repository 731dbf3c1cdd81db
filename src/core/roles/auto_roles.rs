use super::role_editor::RoleEditor;

/// What happened to each auto-role grant for one new member.
#[derive(Debug, Default)]
pub struct GrantReport {
    pub granted: Vec<u64>,
    pub failed: Vec<(u64, String)>,
}

/// Grant each role in order. A failing grant is recorded and the rest still run.
pub async fn grant_auto_roles<E: RoleEditor + ?Sized>(
    editor: &E,
    user_id: u64,
    role_ids: &[u64],
) -> GrantReport {
    let mut report = GrantReport::default();

    for &role_id in role_ids {
        match editor.add_role(user_id, role_id).await {
            Ok(()) => {
                tracing::info!(user_id, role_id, "Assigned auto-role");
                report.granted.push(role_id);
            }
            Err(e) => {
                tracing::warn!(user_id, role_id, "Error assigning auto-role: {}", e);
                report.failed.push((role_id, e.to_string()));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FlakyEditor {
        attempts: Mutex<Vec<u64>>,
        fail_on: u64,
    }

    #[async_trait]
    impl RoleEditor for FlakyEditor {
        async fn add_role(&self, _user_id: u64, role_id: u64) -> Result<()> {
            self.attempts.lock().unwrap().push(role_id);
            if role_id == self.fail_on {
                anyhow::bail!("Missing Permissions");
            }
            Ok(())
        }

        async fn remove_role(&self, _: u64, _: u64) -> Result<()> {
            unreachable!("auto roles never remove")
        }
    }

    #[tokio::test]
    async fn one_failed_grant_does_not_stop_the_others() {
        let editor = FlakyEditor {
            attempts: Mutex::new(Vec::new()),
            fail_on: 10,
        };

        let report = grant_auto_roles(&editor, 5, &[10, 20]).await;

        assert_eq!(*editor.attempts.lock().unwrap(), vec![10, 20]);
        assert_eq!(report.granted, vec![20]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, 10);
        assert!(report.failed[0].1.contains("Missing Permissions"));
    }
}
