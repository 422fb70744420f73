//! HTML views rendered with Handlebars

use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;
use shared::User;

use crate::error::SantaResult;

pub const YOUR_PAIRING: &str = "your-pairing";
pub const GENERATE_FORM: &str = "generate-form";
pub const GENERATE_ERROR: &str = "generate-error";

#[derive(Serialize)]
struct PairingView<'a> {
    user: &'a User,
    pairee: &'a User,
}

#[derive(Serialize)]
struct GenerateFormView<'a> {
    users: &'a [User],
    too_few: bool,
}

#[derive(Serialize)]
struct MessageView<'a> {
    msg: &'a str,
}

pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    /// Register the three views from `<dir>/<name>.html`
    pub fn from_dir(dir: impl AsRef<Path>) -> SantaResult<Self> {
        let dir = dir.as_ref();
        let mut registry = Handlebars::new();
        for name in [YOUR_PAIRING, GENERATE_FORM, GENERATE_ERROR] {
            registry.register_template_file(name, dir.join(format!("{name}.html")))?;
        }
        Ok(Self { registry })
    }

    pub fn your_pairing(&self, user: &User, pairee: &User) -> SantaResult<String> {
        Ok(self.registry.render(YOUR_PAIRING, &PairingView { user, pairee })?)
    }

    pub fn generate_form(&self, users: &[User], too_few: bool) -> SantaResult<String> {
        Ok(self
            .registry
            .render(GENERATE_FORM, &GenerateFormView { users, too_few })?)
    }

    pub fn generate_message(&self, msg: &str) -> SantaResult<String> {
        Ok(self.registry.render(GENERATE_ERROR, &MessageView { msg })?)
    }
}
