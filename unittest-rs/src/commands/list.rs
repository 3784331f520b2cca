//! List command implementation

use anyhow::Result;

use crate::demos::Demo;
use crate::utils::{add_table_row, create_table};

pub fn execute() -> Result<()> {
    let mut table = create_table(vec!["Suite", "Module", "Classes", "Description"]);

    for demo in Demo::ALL {
        let module = demo.module(".");
        add_table_row(
            &mut table,
            vec![
                demo.name().to_string(),
                module.name().to_string(),
                module.class_names().join(", "),
                demo.description().to_string(),
            ],
        );
    }

    table.printstd();
    Ok(())
}
