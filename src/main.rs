use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::Result;
use log::{error, info};
use pushdown::engine::{LineOutcome, Pda, RunError, RunSummary, DEFAULT_EPSILON_LIMIT};
use pushdown::input;
use pushdown::table::TransitionTable;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(author, version, about = "Run input lines through a pushdown automaton")]
struct Cli {
    /// Transition table (text format, or JSON when the name ends in .json)
    #[arg(short, long, value_name = "FILE", default_value = "automaton.txt")]
    table: PathBuf,

    /// Input strings, one per line
    #[arg(short, long, value_name = "FILE", default_value = "text.txt")]
    input: PathBuf,

    /// Carry the stack from one line to the next instead of resetting it
    #[arg(long)]
    keep_stack: bool,

    /// Maximum number of epsilon moves per line
    #[arg(long, value_name = "INT", default_value_t = DEFAULT_EPSILON_LIMIT)]
    epsilon_limit: usize,

    /// Print the stack after every line
    #[arg(long)]
    show_stack: bool,

    /// Print every fired transition
    #[arg(long)]
    trace: bool,

    /// Also print the table, configuration, every line outcome and the
    /// summary as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    TermLogger::init(
        cli.log_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let table = load_table(&cli.table);
    print_table(&mut out, &table)?;
    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&table)?)?;
    }

    let built = Pda::builder()
        .table(table)
        .reset_stack_between_runs(!cli.keep_stack)
        .epsilon_limit(cli.epsilon_limit)
        .build();
    let mut pda = match built {
        Ok(pda) => pda,
        Err(err) => {
            error!("cannot build automaton: {err}");
            return Ok(());
        }
    };
    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(pda.config())?)?;
    }

    let Some(lines) = read_input(&cli.input) else {
        return Ok(());
    };

    let summary = run_all(&mut out, &mut pda, lines, &cli)?;
    info!("{summary}");
    if cli.json {
        writeln!(out, "{}", serde_json::to_string(&summary)?)?;
    }
    Ok(())
}

/// Load the table, falling back to an empty one that rejects everything.
fn load_table(path: &Path) -> TransitionTable {
    match TransitionTable::load(path) {
        Ok((table, summary)) => {
            info!(
                "loaded {} transition(s) from '{}'",
                summary.records,
                path.display()
            );
            table
        }
        Err(err) => {
            error!("{err}");
            TransitionTable::default()
        }
    }
}

/// Read the input lines, or log why they cannot be read.
fn read_input(path: &Path) -> Option<Vec<String>> {
    match input::read_lines(path) {
        Ok(lines) => Some(lines),
        Err(err) => {
            error!("failed to open input file '{}': {err}", path.display());
            None
        }
    }
}

fn print_table<W: Write>(out: &mut W, table: &TransitionTable) -> io::Result<()> {
    writeln!(out, "States:")?;
    for state in table.states() {
        writeln!(out, "  state {state}: {}", state.label())?;
    }
    write!(out, "{table}")
}

/// Run every line and print its outcome.
fn run_all<W: Write>(
    out: &mut W,
    pda: &mut Pda,
    lines: Vec<String>,
    cli: &Cli,
) -> io::Result<RunSummary> {
    let mut summary = RunSummary::default();
    for line in lines {
        let result = pda.run(&line);
        summary.record(&result);
        let outcome = LineOutcome { line, result };
        print_outcome(out, pda, &outcome, cli)?;
    }
    Ok(summary)
}

fn print_outcome<W: Write>(
    out: &mut W,
    pda: &Pda,
    outcome: &LineOutcome,
    cli: &Cli,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Read line: {}", outcome.line)?;
    match &outcome.result {
        Ok(report) => writeln!(out, "{}", report.verdict)?,
        Err(err) => print_failure(out, err)?,
    }
    if cli.trace {
        for step in pda.trace().steps() {
            writeln!(out, "  {step}")?;
        }
    }
    if cli.show_stack {
        writeln!(out, "Stack contents: {}", pda.stack())?;
    }
    if cli.json {
        serde_json::to_writer(&mut *out, outcome)?;
        writeln!(out)?;
    }
    Ok(())
}

fn print_failure<W: Write>(out: &mut W, err: &RunError) -> io::Result<()> {
    writeln!(out, "Transition error: {err}")?;
    if let RunError::NoTransition {
        blocked_by_stack: true,
        stack_top,
        ..
    } = err
    {
        match stack_top {
            Some(top) => writeln!(out, "  rules exist for this symbol, but none pops '{top}'")?,
            None => writeln!(out, "  rules exist for this symbol, but the stack is empty")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pushdown::engine::Verdict;
    use test_log::test;

    fn demo(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pushdown").chain(args.iter().copied())).unwrap()
    }

    fn run_to_string(table: &str, lines: &[&str], cli: &Cli) -> (String, RunSummary) {
        let (table, _) = TransitionTable::parse(table).unwrap();
        let mut pda = Pda::builder()
            .table(table)
            .reset_stack_between_runs(!cli.keep_stack)
            .build()
            .unwrap();
        let lines = lines.iter().map(|line| line.to_string()).collect();

        let mut out = Vec::new();
        let summary = run_all(&mut out, &mut pda, lines, cli).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn defaults_use_fixed_file_names() {
        let cli = cli(&[]);
        assert_eq!(cli.table, PathBuf::from("automaton.txt"));
        assert_eq!(cli.input, PathBuf::from("text.txt"));
        assert_eq!(cli.epsilon_limit, DEFAULT_EPSILON_LIMIT);
        assert!(!cli.keep_stack && !cli.show_stack && !cli.trace && !cli.json);
        assert_eq!(cli.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn flags_are_parsed() {
        let cli = cli(&[
            "-t",
            "rules.json",
            "--input",
            "words.txt",
            "--keep-stack",
            "--epsilon-limit",
            "5",
            "--show-stack",
            "--trace",
            "--json",
            "-vv",
        ]);
        assert_eq!(cli.table, PathBuf::from("rules.json"));
        assert_eq!(cli.input, PathBuf::from("words.txt"));
        assert!(cli.keep_stack && cli.show_stack && cli.trace && cli.json);
        assert_eq!(cli.epsilon_limit, 5);
        assert_eq!(cli.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn bad_epsilon_limit_is_refused() {
        let parsed = Cli::try_parse_from(["pushdown", "--epsilon-limit", "many"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn unreadable_table_falls_back_to_empty() {
        let table = load_table(&demo("missing.txt"));
        assert!(table.is_empty());
        assert_eq!(table.accept_state(), None);

        let mut pda = Pda::new(table);
        assert_eq!(pda.run("").unwrap().verdict, Verdict::Rejected);
    }

    #[test]
    fn demo_table_is_loaded() {
        let table = load_table(&demo("automaton.txt"));
        assert_eq!(table.len(), 5);

        let mut out = Vec::new();
        print_table(&mut out, &table).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("States:\n  state 0: q0\n"));
        assert!(out.contains("accepting state: 2\n"));
    }

    #[test]
    fn missing_input_is_skipped() {
        assert_eq!(read_input(&demo("missing.txt")), None);
        assert_eq!(read_input(&demo("text.txt")).map(|lines| lines.len()), Some(7));
    }

    #[test]
    fn each_line_is_echoed_with_its_result() {
        let (out, summary) = run_to_string("1\n0 1 a - ;", &["a", "b", ""], &cli(&[]));

        assert_eq!(
            out,
            "\nRead line: a\n\
             Reached the accepting state. Input accepted.\n\
             \nRead line: b\n\
             Transition error: no transition from state 0 on symbol 'b' (input position 0)\n\
             \nRead line: \n\
             Input rejected. The final state is not the accepting state.\n"
        );
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn blocked_symbol_gets_a_hint() {
        let (out, _) = run_to_string("1\n0 1 a x ;", &["a"], &cli(&[]));
        assert!(out.contains("  rules exist for this symbol, but none pops 'e'\n"));
    }

    #[test]
    fn stack_and_trace_are_printed_on_request() {
        let (out, _) = run_to_string(
            "1\n0 1 a - x ;",
            &["a"],
            &cli(&["--show-stack", "--trace"]),
        );
        assert!(out.contains("  0 -> 1 on 'a', push 'x'\n"));
        assert!(out.contains("Stack contents: 'x' 'e'\n"));
    }

    #[test]
    fn json_outcome_follows_each_line() {
        let (out, _) = run_to_string("1\n0 1 a - ;", &["a", "b"], &cli(&["--json"]));
        let outcomes: Vec<LineOutcome> = out
            .lines()
            .filter(|line| line.starts_with('{'))
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].line, "a");
        assert!(outcomes[0].result.is_ok());
        assert!(matches!(
            outcomes[1].result,
            Err(RunError::NoTransition { symbol: 'b', .. })
        ));
    }

    #[test]
    fn kept_stack_shows_leftovers() {
        let (out, _) = run_to_string(
            "1\n0 1 a - x ;",
            &["a", "a"],
            &cli(&["--keep-stack", "--show-stack"]),
        );
        assert!(out.contains("Stack contents: 'x' 'x' 'e'\n"));
    }
}
