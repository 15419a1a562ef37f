use std::process;

use clap::Parser;
use serde_json::{Value, json};

use metrograph::{MetroConfig, MetroGraph, MetroGraphError, OutputFormat, Station, VisitKind};

fn main() {
    let config = MetroConfig::parse();
    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        process::exit(if err.is_fatal_load() { 2 } else { 1 });
    }
}

fn run(config: &MetroConfig) -> Result<(), MetroGraphError> {
    let store = config.open_store()?;
    let graph = MetroGraph::load(&store)?;
    let start = config.resolve_start(&graph)?;
    let report = print_visits(&graph, start, config)?;
    if config.format == OutputFormat::Json {
        match serde_json::to_string_pretty(&Value::Object(report)) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("error: cannot render report: {err}");
                process::exit(1);
            }
        }
    }
    Ok(())
}

fn print_visits(
    graph: &MetroGraph,
    start: &Station,
    config: &MetroConfig,
) -> Result<serde_json::Map<String, Value>, MetroGraphError> {
    let wants = |kind: VisitKind| config.visit == kind || config.visit == VisitKind::All;
    let mut report = serde_json::Map::new();
    report.insert("start".into(), json!(start));
    if wants(VisitKind::BreadthFirst) {
        let visit = graph.breadth_first_visit(start)?;
        emit(config.format, "breadth-first", start, &visit, &mut report);
    }
    if wants(VisitKind::DepthFirst) {
        let visit = graph.depth_first_visit(start)?;
        emit(config.format, "depth-first", start, &visit, &mut report);
    }
    if wants(VisitKind::Tree) {
        let tree = graph.visit_tree(start)?;
        match config.format {
            OutputFormat::Text => {
                println!("visit tree from {start}:");
                for (station, parent) in tree.iter() {
                    match parent {
                        Some(parent) => println!("  {station} -> {parent}"),
                        None => println!("  {station} -> none"),
                    }
                }
            }
            OutputFormat::Json => {
                let entries: Vec<Value> = tree
                    .iter()
                    .map(|(station, parent)| json!({ "station": station, "parent": parent }))
                    .collect();
                report.insert("tree".into(), Value::Array(entries));
            }
        }
    }
    Ok(report)
}

fn emit(
    format: OutputFormat,
    label: &str,
    start: &Station,
    visit: &[&Station],
    report: &mut serde_json::Map<String, Value>,
) {
    match format {
        OutputFormat::Text => {
            println!("{label} from {start}:");
            for station in visit {
                println!("  {station}");
            }
        }
        OutputFormat::Json => {
            report.insert(label.to_string(), json!(visit));
        }
    }
}
