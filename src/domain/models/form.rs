#[cfg(test)]
#[path = "form_test.rs"]
mod tests;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
    pub masked: bool,
}

impl FormField {
    fn new(label: &'static str, masked: bool) -> FormField {
        return FormField {
            label,
            value: "".to_string(),
            masked,
        };
    }

    pub fn display_value(&self) -> String {
        if self.masked {
            return "*".repeat(self.value.chars().count());
        }

        return self.value.to_string();
    }
}

/// Input state for the account screens. Nothing entered here is validated or
/// sent anywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Form {
    pub fields: Vec<FormField>,
    pub focus: usize,
}

impl Form {
    fn new(fields: Vec<FormField>) -> Form {
        return Form { fields, focus: 0 };
    }

    pub fn login() -> Form {
        return Form::new(vec![
            FormField::new("Email address", false),
            FormField::new("Password", true),
        ]);
    }

    pub fn signup() -> Form {
        return Form::new(vec![
            FormField::new("Email address", false),
            FormField::new("Password", true),
            FormField::new("Confirm password", true),
        ]);
    }

    pub fn forget_password() -> Form {
        return Form::new(vec![FormField::new("Email address", false)]);
    }

    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn push_str(&mut self, text: &str) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value += &text.replace(['\n', '\r'], "");
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
        }
    }

    pub fn clear(&mut self) {
        for field in self.fields.iter_mut() {
            field.value.clear();
        }
        self.focus = 0;
    }
}
