//! Command Line Interface for the concentrated liquidity range session.
use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use clmm_range_domain::value_objects::{Price, PriceRange};
use clmm_range_session::prelude::*;
use dotenv::dotenv;
use rust_decimal::Decimal;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

#[derive(Parser)]
#[command(name = "clmm-range")]
#[command(about = "Concentrated liquidity range and deposit calculator", long_about = None)]
struct Cli {
    /// Decimals used when echoing prices (overrides CLMM_PRICE_DECIMAL)
    #[arg(long, global = true)]
    price_decimal: Option<u32>,

    /// Pool tick spacing (overrides CLMM_TICK_SPACING)
    #[arg(long, global = true)]
    tick_spacing: Option<i32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    Passive,
    Moderate,
    Aggressive,
}

impl From<PresetArg> for VolatilityPreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Passive => VolatilityPreset::Passive,
            PresetArg::Moderate => VolatilityPreset::Moderate,
            PresetArg::Aggressive => VolatilityPreset::Aggressive,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a range and balance a deposit
    Add {
        /// Current price (base per quote)
        #[arg(short, long)]
        price: Decimal,

        /// Lower price bound
        #[arg(long, requires = "upper")]
        lower: Option<Decimal>,

        /// Upper price bound
        #[arg(long, requires = "lower")]
        upper: Option<Decimal>,

        /// Volatility preset (applied after explicit bounds)
        #[arg(long, value_enum)]
        preset: Option<PresetArg>,

        /// Base amount to deposit
        #[arg(long, conflicts_with = "quote")]
        base: Option<Decimal>,

        /// Quote amount to deposit
        #[arg(long)]
        quote: Option<Decimal>,

        /// Print the session view as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Replay upper-bound drag frames through the debouncer
    Drag {
        /// Current price (base per quote)
        #[arg(short, long)]
        price: Decimal,

        /// Base amount to deposit before dragging
        #[arg(long)]
        base: Decimal,

        /// Upper bound values emitted by the drag, in order
        #[arg(long, value_delimiter = ',', required = true)]
        frames: Vec<Decimal>,

        /// Milliseconds between frames
        #[arg(long, default_value_t = 16)]
        frame_ms: u64,
    },
    /// Preview a partial withdrawal from a position
    Remove {
        /// Current price (base per quote)
        #[arg(short, long)]
        price: Decimal,

        /// Lower price bound of the position
        #[arg(long)]
        lower: Decimal,

        /// Upper price bound of the position
        #[arg(long)]
        upper: Decimal,

        /// Base amount held
        #[arg(long)]
        base: Decimal,

        /// Quote amount held
        #[arg(long)]
        quote: Decimal,

        /// Position spans the full range
        #[arg(long, default_value_t = false)]
        passive: bool,

        /// Percentage to remove (0-100)
        #[arg(long, default_value_t = 50)]
        percent: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = SessionConfig::from_env()?;
    if let Some(decimals) = cli.price_decimal {
        config.price_decimal = decimals;
    }
    if let Some(spacing) = cli.tick_spacing {
        config.tick_spacing = spacing;
    }
    config.validate()?;

    match cli.command {
        Commands::Add {
            price,
            lower,
            upper,
            preset,
            base,
            quote,
            json,
        } => {
            let mut session = AddLiquiditySession::new(config);
            if !session.apply_current_price(QueryState::Ready(Price::new(price))) {
                bail!("Current price must be positive, got {}", price);
            }

            if let (Some(lower), Some(upper)) = (lower, upper) {
                report_range(session.set_range(lower, upper));
            }
            if let Some(preset) = preset {
                report_range(session.select_preset(preset.into()));
            }

            let anchor = match (base, quote) {
                (Some(amount), _) => Some((DepositSide::Base, amount)),
                (None, Some(amount)) => Some((DepositSide::Quote, amount)),
                (None, None) => None,
            };
            if let Some((side, amount)) = anchor {
                if let DepositUpdate::Rejected(reason) = session.update_anchor_amount(side, amount)
                {
                    println!("⚠️  {}", reason);
                }
            }

            print_view(&session.view(), json)?;
        }
        Commands::Drag {
            price,
            base,
            frames,
            frame_ms,
        } => {
            let mut session = AddLiquiditySession::new(config);
            if !session.apply_current_price(QueryState::Ready(Price::new(price))) {
                bail!("Current price must be positive, got {}", price);
            }
            session.update_anchor_amount(DepositSide::Base, base);
            print_view(&session.view(), false)?;

            let (tx, input) = mpsc::channel(frames.len().max(1));
            let (mut committed, handle) = spawn_debounced(config.debounce(), input);

            println!(
                "🖱️  Dragging upper bound through {} frames ({} ms apart)...",
                frames.len(),
                frame_ms
            );
            tokio::spawn(async move {
                for frame in frames {
                    if tx.send(frame).await.is_err() {
                        break;
                    }
                    tokio::time::sleep(Duration::from_millis(frame_ms)).await;
                }
            });

            while let Some(upper) = committed.recv().await {
                info!(upper = %upper, "Committing debounced upper bound");
                report_range(session.set_upper(upper));
            }
            handle.await?;

            println!();
            print_view(&session.view(), false)?;
        }
        Commands::Remove {
            price,
            lower,
            upper,
            base,
            quote,
            passive,
            percent,
        } => {
            let range = PriceRange::try_new(lower, upper)?;
            let position = PositionOverview::new(range, base, quote, passive);
            let current = Price::new(price);

            let mut form = position.remove_liquidity();
            form.set_slider(percent);

            println!("\n📊 Position");
            println!("════════════════════════════════════");
            println!(
                "Range:           {} - {}",
                position.display_lower(config.price_decimal),
                position.display_upper(config.price_decimal)
            );
            println!("Status:          {:?}", position.status(current));
            println!(
                "Base share:      {:.1}%",
                position.base_share(current)?.0 * Decimal::from(100)
            );
            println!("────────────────────────────────────");
            println!("Remove:          {}%", form.slider_value());
            println!("Base out:        {}", form.base_to_remove());
            println!("Quote out:       {}", form.quote_to_remove());
            if let Some(err) = form.error() {
                println!("⚠️  {}", err);
            }
            println!("════════════════════════════════════");
        }
    }

    Ok(())
}

fn report_range(update: RangeUpdate) {
    if let RangeUpdate::Rejected(reason) = update {
        println!("⚠️  Range edit ignored: {}", reason);
    }
}

fn print_view(view: &SessionView, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
        return Ok(());
    }

    let price = view
        .current_price
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());
    let ticks = view
        .tick_range
        .map(|t| format!("[{}, {}]", t.lower_tick, t.upper_tick))
        .unwrap_or_else(|| "-".to_string());
    let lock = |locked: bool| if locked { " 🔒" } else { "" };

    println!("\n📈 Add Liquidity");
    println!("════════════════════════════════════");
    println!("Current price:   {}", price);
    println!("Range:           {} - {}", view.range_min, view.range_max);
    println!("Ticks:           {}", ticks);
    println!("Preset:          {}", view.active_preset);
    println!("────────────────────────────────────");
    println!("Base:            {}{}", view.base_amount, lock(view.locks.base));
    println!("Quote:           {}{}", view.quote_amount, lock(view.locks.quote));
    println!("Anchor:          {:?}", view.anchor);
    println!("════════════════════════════════════");
    Ok(())
}
