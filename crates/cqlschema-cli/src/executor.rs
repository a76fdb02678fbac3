use std::io::Write;

use cqlschema_core::{
    ExecutorError, KeyspacePlan, SchemaExecutor, SetupPlan, UpdatePlan, Versioning, redact_target,
};
use serde::Serialize;

/// Executor that records what would run instead of touching the cluster.
///
/// Each operation emits a log event and writes the plan as pretty JSON.
pub struct DryRunExecutor<W: Write> {
    out: W,
}

#[derive(Serialize)]
struct DryRunReport<'a, P: Serialize> {
    executor: &'static str,
    operation: &'static str,
    plan: &'a P,
}

impl<W: Write> DryRunExecutor<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn report<P: Serialize>(
        &mut self,
        operation: &'static str,
        plan: &P,
    ) -> Result<(), ExecutorError> {
        let report = DryRunReport {
            executor: self.name(),
            operation,
            plan,
        };
        serde_json::to_writer_pretty(&mut self.out, &report)
            .map_err(|err| ExecutorError::Serialize(err.to_string()))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> SchemaExecutor for DryRunExecutor<W> {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    fn create_keyspace(&mut self, plan: &KeyspacePlan) -> Result<(), ExecutorError> {
        let target = redact_target(&plan.target);
        tracing::info!(
            event = "keyspace_planned",
            target = %target.redacted,
            replication_factor = plan.replication_factor,
            datacenter = plan.datacenter.as_deref().unwrap_or("")
        );
        self.report("create_keyspace", plan)
    }

    fn setup_schema(&mut self, plan: &SetupPlan) -> Result<(), ExecutorError> {
        let target = redact_target(&plan.target);
        let initial_version = match &plan.versioning {
            Versioning::Enabled { initial_version } => initial_version.as_str(),
            Versioning::Disabled => "",
        };
        tracing::info!(
            event = "setup_planned",
            target = %target.redacted,
            schema_file = plan.schema_file.as_deref().unwrap_or(""),
            initial_version,
            overwrite = plan.overwrite
        );
        if plan.overwrite {
            tracing::warn!(event = "overwrite_requested", keyspace = %plan.target.keyspace);
        }
        self.report("setup_schema", plan)
    }

    fn update_schema(&mut self, plan: &UpdatePlan) -> Result<(), ExecutorError> {
        let target = redact_target(&plan.target);
        tracing::info!(
            event = "update_planned",
            target = %target.redacted,
            schema_dir = %plan.schema_dir,
            target_version = plan.target_version.as_deref().unwrap_or("latest"),
            dry_run = plan.dry_run
        );
        self.report("update_schema", plan)
    }
}
