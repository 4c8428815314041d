//! Doctor registration commands

use praxis_domain::utils::form::non_empty;
use praxis_domain::{Doctor, Result, ScheduleError, Specialty};
use tracing::info;

use crate::context::AppContext;

/// Register a new doctor from the form inputs
///
/// Every field must be populated and the specialty must be one of the
/// enumerated labels; the CRM must be unique within the practice.
pub fn add_doctor(
    ctx: &mut AppContext,
    name: Option<&str>,
    crm: Option<&str>,
    specialty: Option<&str>,
) -> Result<Doctor> {
    let (Some(name), Some(crm), Some(specialty_label)) =
        (non_empty(name), non_empty(crm), non_empty(specialty))
    else {
        return Err(ScheduleError::MissingFields);
    };

    // The form offers only enumerated labels; anything else counts as an
    // unfilled selection
    let Some(specialty) = Specialty::from_label(specialty_label) else {
        return Err(ScheduleError::MissingFields);
    };

    let doctor = Doctor::new(name, crm, specialty);
    ctx.store.add_doctor(doctor.clone())?;

    info!(crm = %doctor.crm, specialty = %doctor.specialty, "doctor registered");
    Ok(doctor)
}

/// Doctors currently registered, in registration order
pub fn doctors(ctx: &AppContext) -> &[Doctor] {
    ctx.store.doctors()
}
