use crate::BuildArgs;
use dotnetdomain_core::{Build, BuildConfig, BuildReport, collect_documents};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::info;

#[derive(Tabled)]
struct TargetRow {
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Location")]
    location: String,
}

/// Collect and build every document named by `args`, printing warnings.
pub fn build_documents(
    args: &BuildArgs,
    config: BuildConfig,
) -> Result<BuildReport, Box<dyn std::error::Error>> {
    let documents = collect_documents(&args.paths, &config.source_suffix)?;
    info!("Building {} document(s)", documents.len());

    let report = Build::new(config).run(&documents);
    for diagnostic in &report.diagnostics {
        eprintln!("{}", diagnostic);
    }
    Ok(report)
}

pub fn run(
    args: &BuildArgs,
    json: bool,
    fail_on_warning: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.resolve_config()?;
    let fail_on_warning = fail_on_warning || config.fail_on_warning;
    let report = build_documents(args, config)?;
    let entries = report.registry.entries();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if entries.is_empty() {
        println!("No reference targets found.");
    } else {
        let rows: Vec<TargetRow> = entries
            .into_iter()
            .map(|entry| TargetRow {
                kind: entry.kind.to_string(),
                name: entry.name,
                location: format!("{}:{}", entry.target.document, entry.target.line),
            })
            .collect();
        println!("{}", Table::new(rows).with(Style::psql()));
    }

    if fail_on_warning && report.has_warnings() {
        return Err(format!("build produced {} warning(s)", report.diagnostics.len()).into());
    }
    Ok(())
}
