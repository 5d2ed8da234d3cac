//! `smith fields <tool>` - describe a tool's fields.

use shellsmith::{FieldDef, FieldType};

use crate::context::CliContext;
use crate::error::CliResult;
use crate::table::{new_table, truncate_str};

/// Human-readable type column, listing choices and bounds.
pub fn type_label(field: &FieldDef) -> String {
    match &field.type_ {
        FieldType::Text => "text".to_string(),
        FieldType::Boolean => "boolean".to_string(),
        FieldType::Select { options } => {
            let choices: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
            format!("one of {}", choices.join("|"))
        }
        FieldType::Number { min, max } => match (min, max) {
            (Some(lo), Some(hi)) => format!("number {lo}..{hi}"),
            (Some(lo), None) => format!("number >= {lo}"),
            (None, Some(hi)) => format!("number <= {hi}"),
            (None, None) => "number".to_string(),
        },
    }
}

/// Default column; whitespace-only defaults are shown quoted so they stay visible.
pub fn default_label(field: &FieldDef) -> String {
    let text = field.default.to_string();
    if !text.is_empty() && text.trim().is_empty() {
        format!("{text:?}")
    } else {
        truncate_str(&text, 40)
    }
}

pub fn run_fields(context: &CliContext, tool: &str) -> CliResult<()> {
    let tool = context.registry.require(tool)?;
    let fields = tool.fields();

    if let Some(output) = context.render_structured(&fields)? {
        println!("{output}");
        return Ok(());
    }

    println!("{} - {}\n", tool.name(), tool.description());

    let mut table = new_table();
    table.set_header(vec!["Field", "Type", "Default", "Description"]);
    for field in &fields {
        table.add_row(vec![
            field.name.clone(),
            type_label(field),
            default_label(field),
            field.description.clone().unwrap_or_default(),
        ]);
    }
    println!("{table}");
    Ok(())
}
