//! Schema command - print the expected plan input format

use clap::Args;
use leavepay::core::PlanInput;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema or fields
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the plan file
    JsonSchema,
    /// Field descriptions
    Fields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::Fields => self.print_fields(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(PlanInput);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_fields(&self) -> anyhow::Result<()> {
        println!("Plan Input Format");
        println!("=================");
        println!();
        for field in PlanInput::field_docs() {
            let req = if field.optional { "optional" } else { "default 0" };
            println!(
                "{:28} {:10} ({:9})  {}",
                field.name, field.ty, req, field.description
            );
        }
        println!();
        println!("Example:");
        println!(r#"  {{"non_primary_monthly_gross": 8000, "primary_monthly_gross": 6500,"#);
        println!(r#"   "employer_paid_weeks": 12, "pay_rate": "full", "leave_start": "2026-01-01"}}"#);
        Ok(())
    }
}
