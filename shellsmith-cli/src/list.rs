//! `smith list` - list the available tools.

use serde::Serialize;
use shellsmith::{ToolFamily, ToolSpec};

use crate::context::CliContext;
use crate::error::CliResult;
use crate::table::new_table;

/// One row of the tool listing.
#[derive(Debug, Serialize)]
pub struct ToolRow {
    pub name: String,
    pub family: ToolFamily,
    pub description: String,
}

impl From<&dyn ToolSpec> for ToolRow {
    fn from(tool: &dyn ToolSpec) -> Self {
        Self {
            name: tool.name().to_string(),
            family: tool.family(),
            description: tool.description().to_string(),
        }
    }
}

/// Tools sorted by family then name, optionally limited to one family.
pub fn tool_rows(context: &CliContext, family: Option<ToolFamily>) -> Vec<ToolRow> {
    let tools = match family {
        Some(family) => context.registry.by_family(family),
        None => context.registry.tools(),
    };
    tools.into_iter().map(ToolRow::from).collect()
}

pub fn run_list(context: &CliContext, family: Option<ToolFamily>) -> CliResult<()> {
    let rows = tool_rows(context, family);

    if let Some(output) = context.render_structured(&rows)? {
        println!("{output}");
        return Ok(());
    }

    let mut table = new_table();
    table.set_header(vec!["Tool", "Family", "Description"]);
    for row in &rows {
        table.add_row(vec![
            row.name.clone(),
            row.family.to_string(),
            row.description.clone(),
        ]);
    }

    println!("{table}");
    println!("\n{} tool(s). Run `smith fields <tool>` for details.", rows.len());
    Ok(())
}
