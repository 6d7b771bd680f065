#![allow(dead_code)]

/// Builds a stdin script for the menu loop, one entry per line.
#[derive(Default)]
pub struct Script {
    lines: Vec<String>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_balance(mut self, amount: &str) -> Self {
        self.lines.push(amount.to_string());
        self
    }

    pub fn deposit(mut self, amount: &str) -> Self {
        self.lines.push("1".to_string());
        self.lines.push(amount.to_string());
        self
    }

    pub fn withdraw(mut self, amount: &str) -> Self {
        self.lines.push("2".to_string());
        self.lines.push(amount.to_string());
        self
    }

    pub fn check_balance(mut self) -> Self {
        self.lines.push("3".to_string());
        self
    }

    pub fn close(mut self) -> Self {
        self.lines.push("4".to_string());
        self
    }

    pub fn exit(mut self) -> Self {
        self.lines.push("5".to_string());
        self
    }

    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut script = self.lines.join("\n");
        script.push('\n');
        script
    }
}
