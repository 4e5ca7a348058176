//! Implementation of the `vcap-env plan` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::output::{display_value, output, CommandOutput};
use crate::domain::models::Config;
use crate::infrastructure::env::SystemEnv;
use crate::services::binder::{AssignmentStatus, BindPlan, Binder, SkippedInstance};

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Show credential values instead of redacting them
    #[arg(long)]
    pub reveal: bool,
}

/// One row of the plan listing
#[derive(Debug, Serialize)]
pub struct PlanEntry {
    /// Derived variable name
    pub env_name: String,
    /// Value, or a placeholder unless revealed
    pub value: String,
    /// Instance name
    pub service: String,
    /// Credential key as given
    pub credential: String,
    /// Predicted outcome
    pub status: AssignmentStatus,
}

/// Output of `plan`
#[derive(Debug, Serialize)]
pub struct PlanOutput {
    /// Variable the bindings were read from
    pub source_var: String,
    /// Rows in processing order
    pub assignments: Vec<PlanEntry>,
    /// Instances with unsupported credentials
    pub skipped_instances: Vec<SkippedInstance>,
}

impl PlanOutput {
    /// Build the listing, redacting values unless `reveal` is set
    pub fn from_plan(source_var: &str, plan: BindPlan, reveal: bool) -> Self {
        let assignments = plan
            .assignments
            .into_iter()
            .map(|a| PlanEntry {
                value: display_value(&a.value, reveal),
                env_name: a.env_name,
                service: a.service,
                credential: a.credential,
                status: a.status,
            })
            .collect();

        Self {
            source_var: source_var.to_string(),
            assignments,
            skipped_instances: plan.skipped_instances,
        }
    }
}

impl CommandOutput for PlanOutput {
    fn to_human(&self) -> String {
        if self.assignments.is_empty() && self.skipped_instances.is_empty() {
            return format!("No service credentials found in {}", self.source_var);
        }

        let mut lines = Vec::new();
        for entry in &self.assignments {
            let marker = match entry.status {
                AssignmentStatus::Set => "+",
                AssignmentStatus::Preexisting => "=",
                AssignmentStatus::Shadowed => "-",
            };
            let note = match entry.status {
                AssignmentStatus::Set => String::new(),
                AssignmentStatus::Preexisting => "  (already set)".to_string(),
                AssignmentStatus::Shadowed => "  (claimed by an earlier service)".to_string(),
            };
            lines.push(format!("{marker} {}={}{note}", entry.env_name, entry.value));
        }

        if !self.skipped_instances.is_empty() {
            lines.push("\nSkipped services (credentials are not a flat map):".to_string());
            for skipped in &self.skipped_instances {
                lines.push(format!("  - {} ({})", skipped.service, skipped.label));
            }
        }

        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print what a bind would do without writing anything
pub fn execute(args: &PlanArgs, config: &Config, json_mode: bool) -> Result<()> {
    let binder = Binder::new(SystemEnv).with_source_var(&config.source_var);
    let plan = binder
        .plan()
        .with_context(|| format!("Failed to read service bindings from {}", config.source_var))?;

    tracing::debug!(
        assignments = plan.assignments.len(),
        skipped = plan.skipped_instances.len(),
        "computed bind plan"
    );

    output(&PlanOutput::from_plan(&config.source_var, plan, args.reveal), json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::env::InMemoryEnv;

    fn sample_plan() -> BindPlan {
        let env = InMemoryEnv::from_pairs([
            (
                "VCAP_SERVICES",
                r#"{"postgres":[{"name":"db","credentials":{"password":"p","user":"u"}},
                                {"name":"broken","credentials":["x"]}]}"#,
            ),
            ("DB_USER", "admin"),
        ]);
        Binder::new(&env).plan().unwrap()
    }

    #[test]
    fn test_values_are_redacted_by_default() {
        let out = PlanOutput::from_plan("VCAP_SERVICES", sample_plan(), false);
        let human = out.to_human();

        assert!(human.contains("+ DB_PASSWORD=[REDACTED]"));
        assert!(human.contains("= DB_USER=[REDACTED]  (already set)"));
        assert!(human.contains("  - broken (postgres)"));
        assert!(!human.contains("=p"));
    }

    #[test]
    fn test_reveal_shows_values() {
        let out = PlanOutput::from_plan("VCAP_SERVICES", sample_plan(), true);
        assert!(out.to_human().contains("+ DB_PASSWORD=p"));
    }

    #[test]
    fn test_json_output() {
        let out = PlanOutput::from_plan("VCAP_SERVICES", sample_plan(), false);
        let json = out.to_json();

        assert_eq!(json["source_var"], "VCAP_SERVICES");
        assert_eq!(json["assignments"][0]["env_name"], "DB_PASSWORD");
        assert_eq!(json["assignments"][0]["status"], "set");
        assert_eq!(json["assignments"][1]["status"], "preexisting");
        assert_eq!(json["skipped_instances"][0]["service"], "broken");
    }

    #[test]
    fn test_empty_plan() {
        let out = PlanOutput::from_plan("VCAP_SERVICES", BindPlan::default(), false);
        assert_eq!(out.to_human(), "No service credentials found in VCAP_SERVICES");
    }
}
