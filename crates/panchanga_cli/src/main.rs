use std::str::FromStr;

use clap::{Parser, Subcommand};
use panchanga_core::{
    Language, NameCatalog, karana_from_elongation, masa_from_new_moon_longitude,
    nakshatra_from_longitude, rashi_label, saka_year, samvatsara_from_year, tithi_from_elongation,
    vaara_for_moment, yoga_from_sum,
};
use panchanga_search::{
    Geocoder, LocationDetails, MeanMotionProvider, RecurrenceConfig, SearchBound,
    find_recurrences, format_recurrences, format_snapshot, snapshot_at,
};
use panchanga_time::{CivilDate, LocalDateTime, UtcTime, WallClock};

#[derive(Parser)]
#[command(name = "panchanga", about = "Lunisolar calendar CLI")]
struct Cli {
    /// Display language code: en, kn, sa
    #[arg(long, global = true, default_value = "en")]
    lang: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tithi and paksha from Moon-Sun elongation
    Tithi {
        /// Elongation in degrees [0, 360)
        elongation: f64,
    },
    /// Nakshatra and pada from the Moon's sidereal longitude
    Nakshatra {
        /// Sidereal longitude in degrees [0, 360)
        lon: f64,
    },
    /// Yoga from the Sun+Moon longitude sum
    Yoga {
        /// Longitude sum mod 360, in degrees [0, 360)
        sum: f64,
    },
    /// Karana ordinal and name from Moon-Sun elongation
    Karana {
        /// Elongation in degrees [0, 360)
        elongation: f64,
    },
    /// Masa from the Sun's longitude at the preceding new moon
    Masa {
        /// Sidereal solar longitude in degrees [0, 360)
        lon: f64,
    },
    /// Samvatsara for a CE year
    Samvatsara {
        year: i32,
    },
    /// Saka year for a civil date
    Saka {
        /// Civil date (YYYY-MM-DD)
        date: String,
    },
    /// Vaara for a local moment, re-anchored at sunrise
    Vaara {
        /// Civil date (YYYY-MM-DD)
        date: String,
        /// Wall-clock time (hh:mm:ss)
        time: String,
        /// Local sunrise (hh:mm:ss); omit for no-sunrise days
        #[arg(long)]
        sunrise: Option<String>,
    },
    /// Full panchanga report for a local moment at a place
    Panchanga {
        /// Civil date (YYYY-MM-DD)
        date: String,
        /// Wall-clock time (hh:mm:ss)
        time: String,
        /// Place name known to the geocoder
        #[arg(long)]
        place: String,
    },
    /// Future years in which a reference date's lunisolar day recurs
    Recur {
        /// Reference civil date (YYYY-MM-DD)
        date: String,
        /// Reference wall-clock time (hh:mm:ss)
        time: String,
        /// Place name known to the geocoder
        #[arg(long)]
        place: String,
        /// Stop after this many matches
        #[arg(long, conflicts_with = "years")]
        count: Option<u32>,
        /// Scan exactly this many candidate years
        #[arg(long)]
        years: Option<u32>,
        /// First candidate year (default: current year)
        #[arg(long)]
        start_year: Option<i32>,
    },
}

fn parse_date(s: &str) -> Result<CivilDate, String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("{e}"))?;
    CivilDate::new(year, month, day).map_err(|e| format!("{e}"))
}

fn parse_time(s: &str) -> Result<WallClock, String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return Err(format!("expected hh:mm:ss, got {s}"));
    }
    let hour: u32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = parts[2].parse().map_err(|e| format!("{e}"))?;
    WallClock::new(hour, minute, second).map_err(|e| format!("{e}"))
}

fn date_arg(s: &str) -> CivilDate {
    parse_date(s).unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn time_arg(s: &str) -> WallClock {
    parse_time(s).unwrap_or_else(|e| {
        eprintln!("Invalid time: {e}");
        std::process::exit(1);
    })
}

fn lang_arg(s: &str) -> Language {
    Language::from_str(s).unwrap_or_else(|_| {
        eprintln!("Invalid language code: {s} (en, kn, sa)");
        std::process::exit(1);
    })
}

fn resolve_place(provider: &MeanMotionProvider, place: &str) -> LocationDetails {
    provider.resolve(place).unwrap_or_else(|e| {
        eprintln!("Failed to resolve place: {e}");
        std::process::exit(1);
    })
}

/// Backend anchored at the host clock. The built-in provider needs an
/// explicit "now"; the UTC instant is taken from the system time.
fn provider_now() -> MeanMotionProvider {
    let unix_seconds = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);
    // Unix epoch is JD 2440587.5.
    let jd = 2_440_587.5 + unix_seconds / 86_400.0;
    MeanMotionProvider::new(UtcTime::from_jd_utc(jd))
}

fn main() {
    let cli = Cli::parse();
    let lang = lang_arg(&cli.lang);

    match cli.command {
        Commands::Tithi { elongation } => match tithi_from_elongation(elongation) {
            Ok(info) => {
                println!(
                    "{} {} (index {}, #{} of paksha)",
                    info.paksha.name(),
                    info.tithi.name(),
                    info.tithi_index,
                    info.tithi_in_paksha
                );
            }
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        Commands::Nakshatra { lon } => match nakshatra_from_longitude(lon) {
            Ok(info) => {
                println!(
                    "{} pada {} ({:.4} deg into nakshatra, junction star {})",
                    info.nakshatra.name(),
                    info.pada,
                    info.degrees_in_nakshatra,
                    info.nakshatra.junction_star()
                );
            }
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        Commands::Yoga { sum } => match yoga_from_sum(sum) {
            Ok(info) => println!("{} (index {})", info.yoga.name(), info.yoga_index),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        Commands::Karana { elongation } => match karana_from_elongation(elongation) {
            Ok(info) => println!("{} (#{} of 60)", info.karana.name(), info.ordinal),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        Commands::Masa { lon } => match masa_from_new_moon_longitude(lon) {
            Ok(masa) => {
                let rashi = panchanga_core::rashi_from_longitude(lon)
                    .map(|info| rashi_label(lang, info.rashi))
                    .unwrap_or_default();
                println!("{} (new moon in {rashi})", masa.name());
            }
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        Commands::Samvatsara { year } => {
            let (samvatsara, order) = samvatsara_from_year(year);
            println!("{} (#{order} of 60)", samvatsara.name());
        }
        Commands::Saka { date } => {
            let date = date_arg(&date);
            println!("{}", saka_year(date));
        }
        Commands::Vaara {
            date,
            time,
            sunrise,
        } => {
            let local = LocalDateTime::new(date_arg(&date), time_arg(&time));
            let rise = sunrise.as_deref().map(time_arg);
            let vaara = vaara_for_moment(&local, rise);
            match NameCatalog::vaara(lang, vaara.index()) {
                Ok(name) => println!("{name}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Panchanga { date, time, place } => {
            let provider = provider_now();
            let location = resolve_place(&provider, &place);
            let local = LocalDateTime::new(date_arg(&date), time_arg(&time));
            let report = snapshot_at(&provider, &local, &location)
                .and_then(|snap| format_snapshot(&snap, lang));
            match report {
                Ok(text) => print!("{text}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Recur {
            date,
            time,
            place,
            count,
            years,
            start_year,
        } => {
            let provider = provider_now();
            let location = resolve_place(&provider, &place);
            let reference = LocalDateTime::new(date_arg(&date), time_arg(&time));
            let bound = match (count, years) {
                (Some(n), None) => SearchBound::Count(n),
                (None, Some(n)) => SearchBound::Years(n),
                (None, None) => SearchBound::Count(5),
                (Some(_), Some(_)) => unreachable!("clap rejects conflicting bounds"),
            };
            let config = RecurrenceConfig {
                start_year,
                ..RecurrenceConfig::default()
            };
            let report = find_recurrences(&provider, &reference, &location, bound, &config)
                .and_then(|result| format_recurrences(&result, lang));
            match report {
                Ok(text) => print!("{text}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
