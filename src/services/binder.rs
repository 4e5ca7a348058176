//! Projection of service credentials into the environment.
//!
//! Every credential of every bound service instance is exposed as
//! `<SERVICE>_<KEY>`, e.g. the `api-key` credential of `service-1` becomes
//! `SERVICE_1_API_KEY`. Variables that already exist are never overwritten.
//! When two instances derive the same name, the first one processed wins:
//! labels in sorted order, instances in listed order, keys in sorted order.

use serde::Serialize;
use std::collections::HashSet;

use crate::domain::error::DecodeError;
use crate::domain::models::{credential_env_name, service_env_prefix, ServiceBindingSet};
use crate::domain::ports::{validate_assignment, EnvStore};
use crate::infrastructure::env::SystemEnv;

pub use crate::domain::models::service::VCAP_SERVICES_ENV;

/// Bind `VCAP_SERVICES` credentials into the process environment.
///
/// Meant to run once at startup, before any other thread reads the
/// environment.
pub fn bind() -> Result<(), DecodeError> {
    Binder::new(SystemEnv).bind().map(|_| ())
}

/// What will happen to a single derived variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// Not yet set; will be written
    Set,
    /// Already present in the environment; left alone
    Preexisting,
    /// Claimed by an earlier instance in the same run
    Shadowed,
}

/// A credential mapped onto an environment variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    /// Derived variable name
    pub env_name: String,
    /// Textual form of the credential value
    pub value: String,
    /// Service label the instance was listed under
    pub label: String,
    /// Instance name
    pub service: String,
    /// Credential key as given
    pub credential: String,
    /// Outcome predicted against the current environment
    pub status: AssignmentStatus,
}

/// Instance whose credentials were not a flat map of scalars
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedInstance {
    /// Service label the instance was listed under
    pub label: String,
    /// Instance name
    pub service: String,
}

/// Everything a bind would do, computed without writing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BindPlan {
    /// Every derived variable, in processing order
    pub assignments: Vec<Assignment>,
    /// Instances with unsupported credentials
    pub skipped_instances: Vec<SkippedInstance>,
}

impl BindPlan {
    /// Assignments that will actually be written
    pub fn pending(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.status == AssignmentStatus::Set)
    }
}

/// A write the environment store refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedAssignment {
    /// Variable that could not be written
    pub env_name: String,
    /// Store error message
    pub reason: String,
}

/// Outcome of a bind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BindReport {
    /// Variables written by this bind
    pub bound: Vec<String>,
    /// Variables left alone because they were already set
    pub preexisting: Vec<String>,
    /// Variables already written by an earlier instance in this bind
    pub shadowed: Vec<String>,
    /// Writes the store refused
    pub rejected: Vec<RejectedAssignment>,
    /// Instances with unsupported credentials
    pub skipped_instances: Vec<SkippedInstance>,
}

/// Binds service credentials from a JSON source variable into an [`EnvStore`]
#[derive(Debug, Clone)]
pub struct Binder<E> {
    env: E,
    source_var: String,
}

impl<E: EnvStore> Binder<E> {
    /// Binder reading [`VCAP_SERVICES_ENV`]
    pub fn new(env: E) -> Self {
        Self {
            env,
            source_var: VCAP_SERVICES_ENV.to_string(),
        }
    }

    /// Read the bindings from another variable
    #[must_use]
    pub fn with_source_var(mut self, source_var: impl Into<String>) -> Self {
        self.source_var = source_var.into();
        self
    }

    /// Variable the bindings are read from
    pub fn source_var(&self) -> &str {
        &self.source_var
    }

    /// Decode the source variable.
    ///
    /// Returns `Ok(None)` when it is unset or empty. Any other content that
    /// is not a service binding set, including text that is not UTF-8, is a
    /// [`DecodeError`].
    pub fn decode(&self) -> Result<Option<ServiceBindingSet>, DecodeError> {
        let raw = match self.env.get_os(&self.source_var) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(None),
        };

        ServiceBindingSet::from_json(raw.as_encoded_bytes())
            .map(Some)
            .map_err(|err| DecodeError::new(&self.source_var, err))
    }

    /// Work out every assignment without touching the environment
    pub fn plan(&self) -> Result<BindPlan, DecodeError> {
        let Some(services) = self.decode()? else {
            return Ok(BindPlan::default());
        };

        let mut plan = BindPlan::default();
        let mut claimed = HashSet::new();

        for (label, instance) in services.instances() {
            let Some(credentials) = instance.credentials() else {
                plan.skipped_instances.push(SkippedInstance {
                    label: label.to_string(),
                    service: instance.name.clone(),
                });
                continue;
            };

            let prefix = service_env_prefix(&instance.name);
            for (key, value) in credentials.iter() {
                let env_name = credential_env_name(&prefix, key);
                let value = value.to_env_value();
                // a write the store will refuse does not claim the name
                let status = if self.env.exists(&env_name) {
                    AssignmentStatus::Preexisting
                } else if claimed.contains(&env_name) {
                    AssignmentStatus::Shadowed
                } else {
                    if validate_assignment(&env_name, &value).is_ok() {
                        claimed.insert(env_name.clone());
                    }
                    AssignmentStatus::Set
                };

                plan.assignments.push(Assignment {
                    env_name,
                    value,
                    label: label.to_string(),
                    service: instance.name.clone(),
                    credential: key.to_string(),
                    status,
                });
            }
        }

        Ok(plan)
    }

    /// Decode the source variable and write every credential that is not
    /// already set.
    ///
    /// Precedence is settled against the store at write time: a name counts
    /// as taken only once a write to it has succeeded. Only a decode failure
    /// is an error; nothing is written in that case.
    pub fn bind(&self) -> Result<BindReport, DecodeError> {
        let plan = self.plan()?;
        let mut report = BindReport {
            skipped_instances: plan.skipped_instances,
            ..BindReport::default()
        };
        let mut written = HashSet::new();

        for assignment in plan.assignments {
            let env_name = assignment.env_name;
            if written.contains(&env_name) {
                report.shadowed.push(env_name);
            } else if self.env.exists(&env_name) {
                report.preexisting.push(env_name);
            } else {
                match self.env.set(&env_name, &assignment.value) {
                    Ok(()) => {
                        written.insert(env_name.clone());
                        report.bound.push(env_name);
                    }
                    Err(err) => report.rejected.push(RejectedAssignment {
                        env_name,
                        reason: err.to_string(),
                    }),
                }
            }
        }

        Ok(report)
    }
}
