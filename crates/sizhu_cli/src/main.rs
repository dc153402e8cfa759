use clap::{Parser, Subcommand};
use sizhu_analysis::{classify, pair_compatibility};
use sizhu_chart::{
    ChartInput, CivilDateTime, FourPillars, GeoLocation, compute_pillars, day_pillar, hour_pillar,
    solar_month, sui_year, year_pillar,
};
use sizhu_cycles::{ALL_STEMS, Stem};
use sizhu_report::{
    ReadingProfile, chart_json, classification_json, daily_prompt, pair_prompt, render_chart,
};
use sizhu_time::julian_day_number;

#[derive(Parser)]
#[command(name = "sizhu", about = "Four-pillars calculation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the four pillars for a civil date/time
    Chart {
        /// Local civil datetime (YYYY-MM-DDThh:mm)
        #[arg(long)]
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: Option<f64>,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: Option<f64>,
        /// Input date is a lunar-calendar date
        #[arg(long)]
        lunar: bool,
        /// Emit JSON instead of the text table
        #[arg(long)]
        json: bool,
    },
    /// Compute a chart and its element/animal classification
    Classify {
        /// Local civil datetime (YYYY-MM-DDThh:mm)
        #[arg(long)]
        date: String,
        /// Emit JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
    /// Year pillar for a solar (sui) year
    YearPillar {
        /// Solar year (already Lichun-adjusted)
        #[arg(long)]
        year: i32,
    },
    /// Day pillar for a civil date
    DayPillar {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Hour pillar from a day stem and civil hour
    HourPillar {
        /// Day stem index (0=Jia .. 9=Gui)
        #[arg(long)]
        day_stem: u8,
        /// Civil hour (0-23)
        #[arg(long)]
        hour: u32,
    },
    /// Solar month and sui year for a civil date
    SolarMonth {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Julian day number for a civil date
    Jdn {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Prompt block for a daily reading
    DailyPrompt {
        /// Birth civil datetime (YYYY-MM-DDThh:mm)
        #[arg(long)]
        birth: String,
        /// Current-day civil datetime (YYYY-MM-DDThh:mm)
        #[arg(long)]
        today: String,
    },
    /// Pair compatibility and its prompt block
    Pair {
        /// First person's birth datetime (YYYY-MM-DDThh:mm)
        #[arg(long)]
        user: String,
        /// Second person's birth datetime (YYYY-MM-DDThh:mm)
        #[arg(long)]
        partner: String,
        /// Relationship purpose (repeatable)
        #[arg(long)]
        purpose: Vec<String>,
    },
}

fn parse_datetime(s: &str) -> CivilDateTime {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn parse_date(s: &str) -> CivilDateTime {
    parse_datetime(&format!("{s}T00:00"))
}

fn require_stem(index: u8) -> Stem {
    ALL_STEMS.get(index as usize).copied().unwrap_or_else(|| {
        eprintln!("Invalid stem index: {index} (0-9: Jia..Gui)");
        std::process::exit(1);
    })
}

fn chart_or_exit(input: &ChartInput) -> FourPillars {
    compute_pillars(input).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn profile_for(date: &str) -> ReadingProfile {
    let input = ChartInput::new(parse_datetime(date));
    let chart = chart_or_exit(&input);
    ReadingProfile::from(&classify(&chart))
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            date,
            lat,
            lon,
            lunar,
            json,
        } => {
            let mut input = ChartInput::new(parse_datetime(&date)).with_lunar(lunar);
            match (lat, lon) {
                (Some(lat), Some(lon)) => {
                    input = input.with_location(GeoLocation::new(lat, lon));
                }
                (None, None) => {}
                _ => {
                    eprintln!("Provide both --lat and --lon, or neither");
                    std::process::exit(1);
                }
            }
            let chart = chart_or_exit(&input);
            if json {
                match chart_json(&chart) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print!("{}", render_chart(&chart));
            }
        }

        Commands::Classify { date, json } => {
            let input = ChartInput::new(parse_datetime(&date));
            let chart = chart_or_exit(&input);
            let cls = classify(&chart);
            if json {
                match classification_json(&cls) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print!("{}", render_chart(&chart));
                println!(
                    "Dominant element: {}  Weak element: {}",
                    cls.dominant_element.name(),
                    cls.weak_element.name()
                );
                println!(
                    "Dominant animal: {}  Weak animal: {}",
                    cls.dominant_animal.name(),
                    cls.weak_animal.name()
                );
                println!("Personality: {}", cls.profile.personality.join("; "));
            }
        }

        Commands::YearPillar { year } => {
            println!("{}", year_pillar(year));
        }

        Commands::DayPillar { date } => {
            let dt = parse_date(&date);
            let p = day_pillar(julian_day_number(dt.year(), dt.month(), dt.day()));
            println!("{p}");
        }

        Commands::HourPillar { day_stem, hour } => {
            if hour > 23 {
                eprintln!("Invalid hour: {hour} (0-23)");
                std::process::exit(1);
            }
            let p = hour_pillar(require_stem(day_stem), hour);
            println!("{p}");
        }

        Commands::SolarMonth { date } => {
            let dt = parse_date(&date);
            let m = solar_month(dt.month(), dt.day());
            let sui = sui_year(dt.year(), dt.month(), dt.day());
            println!(
                "Solar month: {} ({}), {} months after Yin; sui year {sui}",
                m.branch.name(),
                m.branch.glyph(),
                m.index_from_yin
            );
        }

        Commands::Jdn { date } => {
            let dt = parse_date(&date);
            println!("{}", julian_day_number(dt.year(), dt.month(), dt.day()));
        }

        Commands::DailyPrompt { birth, today } => {
            let user = profile_for(&birth);
            let day = profile_for(&today);
            match daily_prompt(&user, &day) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Pair {
            user,
            partner,
            purpose,
        } => {
            let user_input = ChartInput::new(parse_datetime(&user));
            let partner_input = ChartInput::new(parse_datetime(&partner));
            let user_cls = classify(&chart_or_exit(&user_input));
            let partner_cls = classify(&chart_or_exit(&partner_input));

            let compat =
                pair_compatibility(user_cls.dominant_element, partner_cls.dominant_element);
            println!(
                "Dominant elements: {} / {}",
                user_cls.dominant_element.name(),
                partner_cls.dominant_element.name()
            );
            println!(
                "Compatibility: forward {}, reverse {}, mutual {}",
                compat.forward,
                compat.reverse,
                compat.mutual()
            );

            let user_profile = ReadingProfile::from(&user_cls);
            let partner_profile = ReadingProfile::from(&partner_cls);
            match pair_prompt(&user_profile, &partner_profile, &purpose) {
                Ok(s) => println!("\n{s}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
