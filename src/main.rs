use anyhow::{Context, Result};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use mood_tracker_core::analyzer::{
    MoodAnalyzer, RandomChoiceAnalyzer, SimulatedSession, TextSentimentAnalyzer,
};
use mood_tracker_core::config::{self, Config};
use mood_tracker_core::tracker::{Clock, MoodTracker};
use mood_tracker_core::{demo, dialog, export, history, insights, viz};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = config::from_env_or_args().context("Invalid configuration")?;
    info!("[cfg] {:?}", cfg.toggles());

    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut tracker = MoodTracker::new();
    let entries = dialog::load_entries(&cfg);

    if cfg.face_analysis {
        let face = RandomChoiceAnalyzer::face().with_rng(StdRng::from_rng(&mut rng)?);
        run_once(&cfg, &mut tracker, face, "")?;
    }

    if cfg.voice_analysis {
        let voice = RandomChoiceAnalyzer::voice().with_rng(StdRng::from_rng(&mut rng)?);
        let transcript = entries.first().unwrap_or("");
        let mut session = session_for(&cfg, voice);
        session.start_recording()?;
        session.stop_recording()?;
        let detection = session.finish(transcript)?;
        tracker.record_detection(session.analyzer().source(), &detection, transcript);
    }

    if cfg.text_analysis {
        for entry in &entries.entries {
            run_once(&cfg, &mut tracker, TextSentimentAnalyzer::new(), entry)?;
        }
    }

    println!("Recent Mood History");
    for obs in tracker.history().iter() {
        println!("  {}", viz::observation_line(obs));
    }

    let mock = demo::history(&mut rng, chrono::Local::now());
    println!();
    println!("Your Mood History");
    viz::print_lines(&viz::history_lines(&history::group_by_day(&mock)));

    let counts = insights::count_by_label(mock.iter().chain(tracker.history().iter()));
    println!();
    println!("Mood Distribution");
    viz::print_lines(&viz::distribution_lines(&insights::percentages(&counts)));
    if let Some(mood) = insights::dominant_mood(&counts) {
        println!("Most frequent: {}", mood);
    }

    let week = demo::week(&mut rng);
    println!();
    println!("Weekly Mood Trend  {}", viz::week_sparkline(&week));
    viz::print_lines(&viz::week_lines(&week));
    println!("Overall Trend: {}", insights::overall_trend(&week).as_str());
    if let Some(best) = insights::best_day(&week) {
        println!("Best Day: {}", best.day);
    }

    if let Some(path) = cfg.export_path.as_deref() {
        let written = export::write_jsonl(path, tracker.history().iter())
            .with_context(|| format!("Failed to export history to {}", path))?;
        info!("[export] wrote {} entries to {}", written, path);
    }

    Ok(())
}

fn session_for<A: MoodAnalyzer>(cfg: &Config, analyzer: A) -> SimulatedSession<A> {
    let session = SimulatedSession::new(analyzer);
    if cfg.fast {
        session.without_delay()
    } else {
        session
    }
}

fn run_once<A: MoodAnalyzer, C: Clock>(
    cfg: &Config,
    tracker: &mut MoodTracker<C>,
    analyzer: A,
    input: &str,
) -> Result<()> {
    let mut session = session_for(cfg, analyzer);
    session.start()?;
    let detection = session.finish(input)?;
    tracker.record_detection(session.analyzer().source(), &detection, input);
    Ok(())
}
