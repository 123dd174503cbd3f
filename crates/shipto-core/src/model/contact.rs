/// Contact details resolved for a customer at submit time.
///
/// Both fields are optional: the detail endpoint does not always carry them,
/// and the task simply omits what is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub full_name: Option<String>,
    pub mobile: Option<String>,
}
