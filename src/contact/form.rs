use serde::{Deserialize, Serialize};

use super::store::Store;

/// Sent to the owner in place of a blank phone number.
pub const PHONE_NOT_PROVIDED: &str = "Not provided";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// The `name` attribute of the matching form control.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    /// How the field is named to the visitor, in messages and `aria-label`s.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone number",
            Field::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Phone)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// First required field left blank, in form order. Mirrors the browser's
    /// `required` check so a bypassed form never reaches the relay.
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| f.is_required())
            .find(|f| self.get(*f).trim().is_empty())
    }

    pub fn phone_or_default(&self) -> &str {
        if self.phone.trim().is_empty() {
            PHONE_NOT_PROVIDED
        } else {
            &self.phone
        }
    }
}

/// Holds the form the visitor is typing into.
#[derive(Debug, Clone, Copy)]
pub struct FormState<S> {
    store: S,
}

impl<S: Store<FormData>> FormState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.store.modify(move |data| data.set_field(field, value));
    }

    pub fn snapshot(&self) -> FormData {
        self.store.read(FormData::clone)
    }

    pub fn clear(&self) {
        self.store.modify(|data| *data = FormData::default());
    }
}
