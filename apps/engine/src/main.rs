use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use xyz_engine::generation::vocabulary::{IMPACT_PHRASES, QUANTIFICATION_EXAMPLES};
use xyz_engine::samples::sample_fresher_profile;
use xyz_engine::{
    BulletOptions, CandidateProfile, Config, GeneratedBullet, ResumeEngine, Section,
};

const DEMO_SITUATION: &str = "Legacy system causing performance issues";
const DEMO_ACTION: &str = "Redesigned the architecture using microservices";
const DEMO_RESULT: &str = "Improved performance by 60% and reduced costs by 30%";

const DEMO_JOB_DESCRIPTION: &str = "We are looking for a Frontend Developer with experience in \
    React, JavaScript, and modern web development practices. The ideal candidate will have \
    knowledge of HTML, CSS, and responsive design principles.";

/// Runs the XYZ resume engine over a sample or supplied candidate profile.
#[derive(Debug, Parser)]
#[command(name = "xyz-demo", version)]
struct Cli {
    /// Candidate profile JSON. The built-in sample fresher is used when omitted.
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Plain-text job description used for keyword matching and tailoring.
    #[arg(long)]
    job_description: Option<PathBuf>,

    /// Seed for filler phrase and verb selection (overrides XYZ_RANDOM_SEED).
    #[arg(long)]
    seed: Option<u64>,

    /// Print the generated resume as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if cli.seed.is_some() {
        config.random_seed = cli.seed;
    }

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("xyz_engine={0},xyz_demo={0}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting XYZ resume demo v{}", env!("CARGO_PKG_VERSION"));

    let mut profile = match &cli.profile {
        Some(path) => load_profile(path)?,
        None => sample_fresher_profile(),
    };
    if let Some(path) = &cli.job_description {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job description {}", path.display()))?;
        profile.job_description = Some(text);
    }

    let mut engine = ResumeEngine::from_config(&config);
    let stdout = std::io::stdout();
    run_demo(&mut stdout.lock(), &mut engine, &profile, &config, cli.json)
}

fn load_profile(path: &Path) -> Result<CandidateProfile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    CandidateProfile::from_json(&raw)
        .with_context(|| format!("Invalid profile JSON in {}", path.display()))
}

fn used_filler(bullet: &GeneratedBullet) -> bool {
    IMPACT_PHRASES.iter().any(|p| bullet.result.ends_with(p))
}

fn run_demo(
    out: &mut impl Write,
    engine: &mut ResumeEngine,
    profile: &CandidateProfile,
    config: &Config,
    json: bool,
) -> Result<()> {
    writeln!(out, "XYZ Resume Generator Demo")?;
    writeln!(out, "=========================")?;

    let options = BulletOptions {
        action_verb_category: config.verb_category,
        ..Default::default()
    };
    let bullet = engine.format_bullet(DEMO_SITUATION, DEMO_ACTION, DEMO_RESULT, &options);
    writeln!(out, "\nXYZ bullet ({} verbs):", config.verb_category)?;
    writeln!(out, "  X: {DEMO_SITUATION}")?;
    writeln!(out, "  Y: {DEMO_ACTION}")?;
    writeln!(out, "  Z: {DEMO_RESULT}")?;
    writeln!(out, "  => {}", bullet.formatted)?;

    let validation = engine.validate(profile);
    writeln!(out, "\nValidation errors: {}", validation.errors.len())?;
    for error in &validation.errors {
        writeln!(out, "  - {error}")?;
    }
    writeln!(out, "Validation warnings: {}", validation.warnings.len())?;
    for warning in &validation.warnings {
        writeln!(out, "  - {warning}")?;
    }

    writeln!(out, "\nProfessional summary:\n  {}", engine.generate_summary(profile))?;
    writeln!(out, "\nATS compatibility score: {}%", engine.calculate_ats_score(profile))?;

    match profile
        .job_description
        .as_deref()
        .filter(|jd| !jd.trim().is_empty())
    {
        Some(jd) => writeln!(out, "\nJob keywords: {:?}", engine.extract_keywords(jd))?,
        None => writeln!(
            out,
            "\nSample job description keywords (not applied): {:?}",
            engine.extract_keywords(DEMO_JOB_DESCRIPTION)
        )?,
    }

    let resume = engine
        .generate_tailored_resume(profile)
        .context("Resume generation failed")?;

    let filler_count = resume
        .sections
        .iter()
        .flat_map(|s| s.bullets())
        .filter(|b| used_filler(b))
        .count();

    if json {
        writeln!(out, "\n{}", serde_json::to_string_pretty(&resume)?)?;
    } else {
        writeln!(out, "\nResume generated")?;
        writeln!(out, "  ATS score: {}%", resume.ats_score)?;
        writeln!(out, "  Sections: {}", resume.sections.len())?;
        writeln!(out, "  Titles: {}", resume.section_titles().join(", "))?;
        if let Some(Section::TechnicalSkills(skills)) = resume.section("Technical Skills") {
            if !skills.job_keywords.is_empty() {
                writeln!(out, "  Added job keywords: {}", skills.job_keywords.join(", "))?;
            }
        }
    }

    if filler_count > 0 {
        writeln!(
            out,
            "\n{filler_count} bullet(s) had no metric. Quantified results read like:"
        )?;
        for example in QUANTIFICATION_EXAMPLES {
            writeln!(out, "  - {} ({})", example.example, example.kind)?;
        }
    }

    Ok(())
}
