pub mod binder;

pub use binder::{
    bind, Assignment, AssignmentStatus, BindPlan, BindReport, Binder, RejectedAssignment,
    SkippedInstance, VCAP_SERVICES_ENV,
};
