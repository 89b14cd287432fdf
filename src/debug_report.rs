use tartil::{AnnotationVerbose, PositionBreakdown, RunMetrics};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        fn wrap(&self, s: &str, code: &str) -> String {
            if self.enabled { format!("{}{}{}", code, s, RESET) } else { s.to_string() }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            self.wrap(s.as_ref(), color)
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.wrap(s.as_ref(), BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.wrap(s.as_ref(), DIM)
        }
    }
}

pub fn print_run(input: &str, run: &AnnotationVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Annotating: \"{}\"", input), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Positions ━━━", ansi::GRAY));
    for row in run.result.breakdown() {
        print_position(&row, &palette);
    }

    println!("\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY));
    let summary = run.result.summary();
    if summary.groups.is_empty() {
        println!("{}", palette.dim("  No rules fired"));
    }
    for group in summary.iter() {
        let rules: Vec<String> = group.rules.iter().map(|r| format!("{}×{}", r.name, r.count)).collect();
        println!(
            "  {} {} {}",
            palette.paint(format!("{:<14}", group.category.as_str()), ansi::BLUE),
            palette.paint(group.applications.to_string(), ansi::YELLOW),
            palette.dim(rules.join(", "))
        );
    }

    println!("\n{}", palette.paint("━━━ Output ━━━", ansi::GRAY));
    println!("  {} {}", palette.dim("phonemes:"), palette.paint(run.result.phoneme_string(), ansi::GREEN));
    println!("  {} {}", palette.dim("sifa:    "), run.result.attribute_string());

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    print_metrics(&run.metrics, run.rules.len(), &palette);
    println!();
}

fn print_position(row: &PositionBreakdown, palette: &ansi::Palette) {
    if row.character.is_whitespace() {
        println!("  {}", palette.dim(format!("{:>3} ·", row.position)));
        return;
    }

    println!(
        "  {} {} {} {} {} {}",
        palette.paint(format!("{:>3}", row.position), ansi::GRAY),
        palette.bold(row.character.to_string()),
        palette.paint(format!("{:<4}", row.phoneme), ansi::GREEN),
        palette.dim(format!("{:<8}", row.attribute)),
        palette.paint(format!("{}@{}", row.duration, row.offset), ansi::YELLOW),
        palette.paint(row.rules.join(" "), ansi::CYAN),
    );
}

fn print_metrics(metrics: &RunMetrics, catalog_size: usize, palette: &ansi::Palette) {
    println!(
        "  Total: {}  │  Positions: {}  │  Rules: {}",
        palette.paint(format!("{:?}", metrics.total), ansi::GREEN),
        palette.paint(metrics.positions.to_string(), ansi::BLUE),
        palette.paint(catalog_size.to_string(), ansi::BLUE),
    );
    println!(
        "  Evaluated: {}  │  Matched: {}  │  Accepted: {}  │  Suppressed: {}",
        palette.dim(metrics.evaluated.to_string()),
        palette.paint(metrics.matched.to_string(), ansi::YELLOW),
        palette.paint(metrics.accepted.to_string(), ansi::GREEN),
        palette.dim(metrics.suppressed.to_string()),
    );
}
