use clap::ValueEnum;
use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;
use pubcrawl_core::PubReport;
use pubcrawl_models::{format_create_ts, Pub};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                println!("{} {}", "✓".green(), msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&message_json("success", msg.as_ref()));
            }
        }
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        // Errors are shown even in quiet mode
        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", "✗".red(), msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&message_json("error", msg.as_ref()));
            }
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                println!("{} {}", "⚠".yellow(), msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&message_json("warning", msg.as_ref()));
            }
        }
    }

    pub fn println(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                println!("{}", msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&message_json("info", msg.as_ref()));
            }
        }
    }

    pub fn json(&self, data: &serde_json::Value) {
        if self.quiet && self.format != OutputFormat::Human {
            return;
        }

        self.print_json(data);
    }

    /// Beers one per line, a blank line, then the pub counts
    pub fn report(&self, report: &PubReport, list_pubs: bool) {
        match self.format {
            OutputFormat::Human => {
                if self.quiet {
                    return;
                }
                for beer in &report.beers {
                    println!("{}", beer);
                }
                println!();
                println!("{}", report.summary().bold());
                if list_pubs {
                    println!();
                    println!("{}", pubs_table(&report.pubs));
                }
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                let mut data = serde_json::to_value(report).unwrap_or_default();
                if !list_pubs {
                    if let Some(obj) = data.as_object_mut() {
                        obj.remove("pubs");
                    }
                }
                self.json(&data);
            }
        }
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(data).unwrap_or_default());
            }
            OutputFormat::JsonPretty => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Human => {
                println!("{}", data);
            }
        }
    }
}

fn message_json(kind: &str, msg: &str) -> serde_json::Value {
    json!({
        "type": kind,
        "message": msg
    })
}

pub fn pubs_table(pubs: &[Pub]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Name").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("PostCode").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Id").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Branch").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("CreateTS").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Beers").add_attribute(comfy_table::Attribute::Bold),
    ]);
    for pub_ in pubs {
        table.add_row(vec![
            Cell::new(&pub_.name),
            Cell::new(pub_.postcode.as_deref().unwrap_or("-")),
            Cell::new(&pub_.id),
            Cell::new(&pub_.branch),
            Cell::new(format_create_ts(&pub_.created_at)),
            Cell::new(pub_.beers().count()),
        ]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}
