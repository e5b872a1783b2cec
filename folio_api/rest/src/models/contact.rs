use folio_models::contact::ContactSubmission;
use serde::Deserialize;

/// Body of a contact request. Every field is required, but presence is
/// checked after deserialization so a missing field is reported as such.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactMessage {
    /// Full name of the sender
    pub name: Option<String>,
    /// Email address of the sender
    pub email: Option<String>,
    /// Content of the message
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingFields;

impl TryFrom<ApiContactMessage> for ContactSubmission {
    type Error = MissingFields;

    fn try_from(value: ApiContactMessage) -> Result<Self, Self::Error> {
        fn present<T: TryFrom<String>>(value: Option<String>) -> Result<T, MissingFields> {
            value
                .and_then(|value| T::try_from(value).ok())
                .ok_or(MissingFields)
        }

        Ok(Self {
            name: present(value.name)?,
            email: present(value.email)?,
            text: present(value.text)?,
        })
    }
}
