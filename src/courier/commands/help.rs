use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::parse::usage_lines;

pub fn run() -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Available commands:"));
    for usage in usage_lines() {
        result.add_message(CmdMessage::info(format!("  {}", usage)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_command() {
        let result = run().unwrap();

        let all = result
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        for keyword in [
            "add-client",
            "add-delivery",
            "find-client",
            "find-delivery",
            "list",
            "edit",
            "delete",
            "delete-delivery",
            "mark-delivery",
            "unmark-delivery",
            "clear",
            "undo",
            "help",
            "exit",
        ] {
            assert!(all.contains(keyword), "help is missing {}", keyword);
        }
        assert!(!result.mutated);
    }
}
