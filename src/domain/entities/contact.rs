//! Contact directory entities.

/// A single directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: u32,
    name: String,
    number: String,
    group: String,
}

impl Contact {
    /// Creates a new contact.
    #[must_use]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        number: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            number: number.into(),
            group: group.into(),
        }
    }

    /// Returns the contact id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Returns the contact name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the phone number.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the group this contact belongs to.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }
}

/// A named group of contacts, rendered as one directory section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactGroup {
    /// Section title.
    pub title: String,
    /// Members of the group.
    pub contacts: Vec<Contact>,
}

impl ContactGroup {
    /// Creates a group from a title and its members.
    #[must_use]
    pub fn new(title: impl Into<String>, contacts: Vec<Contact>) -> Self {
        Self {
            title: title.into(),
            contacts,
        }
    }
}

/// Returns the built-in sample directory.
///
/// The directory is static demo data; there is no create/edit lifecycle.
#[must_use]
pub fn sample_directory() -> Vec<ContactGroup> {
    vec![
        ContactGroup::new(
            "Family",
            vec![
                Contact::new(1, "Usama", "555-1234", "Family"),
                Contact::new(2, "Butt", "555-5678", "Family"),
                Contact::new(3, "Hamza", "555-9012", "Family"),
            ],
        ),
        ContactGroup::new(
            "Friends",
            vec![
                Contact::new(4, "Usman", "555-3456", "Friends"),
                Contact::new(5, "Atta", "555-7890", "Friends"),
                Contact::new(6, "Ali", "555-2345", "Friends"),
                Contact::new(7, "Jawad", "555-6789", "Friends"),
            ],
        ),
        ContactGroup::new(
            "Work",
            vec![
                Contact::new(8, "Shazaib", "555-4567", "Work"),
                Contact::new(9, "Bilal", "555-8901", "Work"),
                Contact::new(10, "Salah", "555-1235", "Work"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_directory_shape() {
        let groups = sample_directory();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].title, "Family");
        assert_eq!(groups[1].contacts.len(), 4);

        let total: usize = groups.iter().map(|g| g.contacts.len()).sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn test_contact_accessors() {
        let contact = Contact::new(1, "Usama", "555-1234", "Family");
        assert_eq!(contact.id(), 1);
        assert_eq!(contact.name(), "Usama");
        assert_eq!(contact.number(), "555-1234");
        assert_eq!(contact.group(), "Family");
    }
}
