use std::{fmt::Display, str::FromStr};

use cliclack::{Theme, ThemeState};
use console::Style;

struct PromptTheme;

impl Theme for PromptTheme {
    fn bar_color(&self, _state: &ThemeState) -> Style {
        Style::new().cyan().dim()
    }
}

pub fn init_prompt_theme() {
    cliclack::set_theme(PromptTheme);
}

pub struct Prompt {
    inner: cliclack::Input,
}

impl Prompt {
    pub fn new(question: &str) -> Self {
        Self {
            inner: cliclack::input(question),
        }
    }

    pub fn allow_empty(mut self) -> Self {
        self.inner = self.inner.required(false);
        self
    }

    pub fn default(mut self, default: &str) -> Self {
        self.inner = self.inner.default_input(default);
        self
    }

    pub fn validate_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&String) -> Result<(), String> + 'static,
    {
        self.inner = self.inner.validate(f);
        self
    }

    pub fn ask<T>(mut self) -> T
    where
        T: FromStr,
    {
        self.inner.interact().unwrap()
    }
}

pub struct PromptConfirm {
    inner: cliclack::Confirm,
}

impl PromptConfirm {
    pub fn new(question: &str) -> Self {
        Self {
            inner: cliclack::confirm(question),
        }
    }

    pub fn default(mut self, default: bool) -> Self {
        self.inner = self.inner.initial_value(default);
        self
    }

    pub fn ask(mut self) -> bool {
        self.inner.interact().unwrap()
    }
}

pub struct PromptSelect<T: Clone + Eq> {
    inner: cliclack::Select<T>,
}

impl<T: Clone + Eq + Display> PromptSelect<T> {
    pub fn new(question: &str, items: impl IntoIterator<Item = T>) -> Self {
        let mut select = cliclack::select(question);
        for item in items {
            let label = item.to_string();
            select = select.item(item, label, "");
        }
        Self { inner: select }
    }

    pub fn ask(mut self) -> T {
        self.inner.interact().unwrap()
    }
}
