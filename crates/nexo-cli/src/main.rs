use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, Command};
use nexo_core::{ChatSession, Sequencer, SequencerConfig, SequencerDriver, SequencerSnapshot};
use std::io::BufRead;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("nexo")
        .version(nexo_core::VERSION)
        .about("Nexo restaurant analytics demo")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("process")
                .about("Run the simulated ingestion sequence")
                .arg(
                    Arg::new("step")
                        .long("step")
                        .default_value("4")
                        .value_parser(value_parser!(u8))
                        .help("Progress points per tick (1-100)"),
                )
                .arg(
                    Arg::new("tick-ms")
                        .long("tick-ms")
                        .default_value("100")
                        .value_parser(value_parser!(u64))
                        .help("Progress tick period in milliseconds"),
                )
                .arg(
                    Arg::new("detail-ms")
                        .long("detail-ms")
                        .default_value("1200")
                        .value_parser(value_parser!(u64))
                        .help("Detail rotation period in milliseconds"),
                ),
        )
        .subcommand(
            Command::new("chat")
                .about("Ask the business copilot")
                .arg(
                    Arg::new("query")
                        .num_args(0..)
                        .help("Questions to answer; reads stdin when omitted"),
                ),
        )
        .subcommand(
            Command::new("fixtures")
                .about("Show the demo dataset")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        );

    match cli.get_matches().subcommand() {
        Some(("process", args)) => {
            let config = SequencerConfig::new()
                .with_progress_step(*args.get_one::<u8>("step").unwrap_or(&4))
                .with_tick_period(Duration::from_millis(
                    *args.get_one::<u64>("tick-ms").unwrap_or(&100),
                ))
                .with_detail_period(Duration::from_millis(
                    *args.get_one::<u64>("detail-ms").unwrap_or(&1200),
                ));
            run_process(config).await?;
        }
        Some(("chat", args)) => {
            let queries: Vec<String> = args
                .get_many::<String>("query")
                .map(|q| q.cloned().collect())
                .unwrap_or_default();
            run_chat(queries);
        }
        Some(("fixtures", args)) => {
            run_fixtures(args.get_flag("json"))?;
        }
        _ => {}
    }

    Ok(())
}

async fn run_process(config: SequencerConfig) -> Result<()> {
    let sequencer = Sequencer::new(nexo_fixtures::processing_stages(), config)
        .map_err(nexo_core::NexoError::from)?;

    println!("IA procesando tus datos");
    println!("Analizando tu información...");
    println!();

    let handle = SequencerDriver::spawn(sequencer);
    let mut snapshots = handle.subscribe();
    let mut last_line = String::new();
    let mut completed = 0usize;

    loop {
        let snap = snapshots.borrow_and_update().clone();
        completed = render_progress(&snap, completed, &mut last_line);
        if snap.done {
            break;
        }
        if snapshots.changed().await.is_err() {
            break;
        }
    }

    println!();
    println!("¡Procesamiento completado!");

    // Hold the finished screen, as the demo does before navigating away.
    tokio::time::sleep(config.completion_hold).await;
    handle.shutdown();
    Ok(())
}

/// Print newly completed stages and the active detail line when it changes
fn render_progress(snap: &SequencerSnapshot, completed: usize, last_line: &mut String) -> usize {
    let now_completed = snap
        .stages
        .iter()
        .filter(|s| s.status == nexo_core::StageStatus::Completed)
        .count();
    for stage in &snap.stages[completed..now_completed] {
        println!("  ✓ {}", stage.title);
    }

    if let (Some(active), Some(detail)) = (snap.active, snap.active_detail.as_deref()) {
        let line = format!(
            "  [{:3.0}%] {} → {}",
            snap.overall_pct, snap.stages[active].title, detail
        );
        if line != *last_line {
            println!("{line}");
            *last_line = line;
        }
    }

    now_completed
}

fn run_chat(queries: Vec<String>) {
    let mut session = ChatSession::new(
        nexo_fixtures::responder(),
        nexo_fixtures::welcome_text(),
        nexo_fixtures::sales_by_day(),
    );

    println!("{}", session.messages()[0].content);
    println!();

    if queries.is_empty() {
        println!("Prueba preguntar:");
        for question in nexo_fixtures::suggested_questions().iter().take(4) {
            println!("  - {question}");
        }
        println!();

        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            answer_one(&mut session, &line);
        }
    } else {
        for query in &queries {
            println!("> {query}");
            answer_one(&mut session, query);
        }
    }
}

fn answer_one(session: &mut ChatSession, query: &str) {
    let Some(reply) = session.ask(query) else {
        return;
    };

    println!("{}", reply.content);
    if !reply.steps.is_empty() {
        println!();
        println!("Razonamiento:");
        for (i, step) in reply.steps.iter().enumerate() {
            println!("  {}. {step}", i + 1);
        }
    }
    if let Some(chart) = &reply.chart {
        println!();
        println!("Ventas por día:");
        for point in chart {
            println!("  {:>3}  ${}", point.day, point.sales);
        }
    }
    println!();
}

fn run_fixtures(json: bool) -> Result<()> {
    let stages = nexo_fixtures::processing_stages();
    let rules = nexo_fixtures::response_rules();
    let sales = nexo_fixtures::sales_by_day();

    if json {
        let doc = serde_json::json!({
            "processing_stages": stages,
            "response_rules": rules,
            "default_bundle": nexo_fixtures::default_bundle(),
            "sales_by_day": sales,
            "suggested_questions": nexo_fixtures::suggested_questions(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("Etapas de procesamiento:");
        for (i, stage) in stages.iter().enumerate() {
            println!("  {}. {} — {}", i + 1, stage.title, stage.description);
        }
        println!();
        println!("Reglas de chat (en orden de prioridad):");
        for rule in &rules {
            println!("  {:?}", rule.predicate);
        }
        println!();
        println!("Serie de ventas: {} días", sales.len());
    }

    Ok(())
}
