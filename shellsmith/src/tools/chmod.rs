//! `chmod` from three octal digits
//!
//! Besides the command, the tool renders each digit in symbolic form by
//! decomposing it into read (4), write (2) and execute (1) bits.

use crate::command_line::CommandLine;
use crate::options::OptionSet;
use crate::registry::{Annotation, ToolFamily, ToolSpec};
use crate::types::FieldDef;

const CLASSES: [&str; 3] = ["owner", "group", "other"];

/// Symbolic `rwx` form of one octal digit. Out-of-range input is masked to
/// its low three bits.
pub fn symbolic(digit: u8) -> &'static str {
    const TABLE: [&str; 8] = ["---", "--x", "-w-", "-wx", "r--", "r-x", "rw-", "rwx"];
    TABLE[(digit & 0o7) as usize]
}

pub struct ChmodTool;

impl ChmodTool {
    fn digits(options: &OptionSet) -> [u8; 3] {
        CLASSES.map(|class| options.number(class).unwrap_or(0).clamp(0, 7) as u8)
    }
}

impl ToolSpec for ChmodTool {
    fn name(&self) -> &'static str {
        "chmod"
    }

    fn description(&self) -> &'static str {
        "Set file permissions from owner/group/other octal digits"
    }

    fn family(&self) -> ToolFamily {
        ToolFamily::FileOps
    }

    fn fields(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::number("owner", 7, Some(0), Some(7)).describe("Owner permission digit"),
            FieldDef::number("group", 5, Some(0), Some(7)).describe("Group permission digit"),
            FieldDef::number("other", 5, Some(0), Some(7)).describe("Permission digit for everyone else"),
            FieldDef::text("target", "file.txt").describe("File or folder"),
        ]
    }

    fn synthesize(&self, options: &OptionSet) -> String {
        let [o, g, x] = Self::digits(options);
        CommandLine::new("chmod")
            .arg(format!("{o}{g}{x}"))
            .arg(options.text("target"))
            .render()
    }

    fn annotations(&self, options: &OptionSet) -> Vec<Annotation> {
        let digits = Self::digits(options);
        let mut notes: Vec<Annotation> = CLASSES
            .iter()
            .zip(digits)
            .map(|(class, d)| Annotation::new(*class, symbolic(d)))
            .collect();
        let full: String = digits.iter().map(|d| symbolic(*d)).collect();
        notes.push(Annotation::new("symbolic", full));
        notes
    }
}
