//! Domain models for the Contacts module.

/// A phone contact held by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Contact fields supplied by a client. The id is always chosen by the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    #[must_use]
    pub fn from_new(id: String, new_contact: NewContact) -> Self {
        let NewContact { name, phone, email } = new_contact;
        Self {
            id,
            name,
            phone,
            email,
        }
    }

    /// Overwrites every field except the id.
    pub fn apply(&mut self, new_contact: NewContact) {
        self.name = new_contact.name;
        self.phone = new_contact.phone;
        self.email = new_contact.email;
    }
}

/// The two contacts the service starts with when demo data is enabled.
#[allow(clippy::non_ascii_literal)]
#[must_use]
pub fn demo_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: "1".to_owned(),
            name: "Иван Иванов".to_owned(),
            phone: "+79161234567".to_owned(),
            email: "ivan@mail.ru".to_owned(),
        },
        Contact {
            id: "2".to_owned(),
            name: "Петр Петров".to_owned(),
            phone: "+79169876543".to_owned(),
            email: "petr@mail.ru".to_owned(),
        },
    ]
}
