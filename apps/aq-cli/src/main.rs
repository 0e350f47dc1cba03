use aq_chem::{CarbonateSystem, SpeciationSweep, SweepRange, sweep_hco3_at_fixed_dic,
    sweep_ph_at_fixed_pco2};
use aq_core::{CarbonSpecies, Concentration, Ph};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "aq-cli")]
#[command(about = "Aquacarb CLI - aqueous carbonate-system speciation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the full speciation from one measured pair
    Speciate {
        /// Partial pressure of CO2 in atm (pair with --ph)
        #[arg(long)]
        pco2: Option<f64>,
        /// pH of the solution (pair with --pco2)
        #[arg(long)]
        ph: Option<f64>,
        /// Bicarbonate concentration in mol/L (pair with --dic)
        #[arg(long)]
        hco3: Option<f64>,
        /// Total dissolved inorganic carbon in mol/L (pair with --hco3)
        #[arg(long)]
        dic: Option<f64>,
        /// Emit the six derived values as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sweep an independent variable and export the resulting series
    #[command(subcommand)]
    Sweep(SweepCommands),
}

#[derive(Subcommand)]
enum SweepCommands {
    /// Sweep pH at fixed PCO2 (species concentrations vs pH)
    Ph {
        /// Fixed partial pressure of CO2 in atm
        #[arg(long)]
        pco2: f64,
        /// First pH sample
        #[arg(long, default_value_t = 0.0)]
        start: f64,
        /// Last pH sample
        #[arg(long, default_value_t = 14.0)]
        end: f64,
        /// Additive step between samples
        #[arg(long, default_value_t = 0.1)]
        step: f64,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Sweep HCO3 at fixed DIC (PCO2 vs HCO3)
    Hco3 {
        /// Fixed total dissolved inorganic carbon in mol/L
        #[arg(long)]
        dic: f64,
        /// First HCO3 sample in mol/L
        #[arg(long, default_value_t = 1.0e-8)]
        start: f64,
        /// Multiplicative factor between samples
        #[arg(long, default_value_t = 1.2)]
        factor: f64,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Speciate {
            pco2,
            ph,
            hco3,
            dic,
            json,
        } => cmd_speciate(pco2, ph, hco3, dic, json),
        Commands::Sweep(sweep_cmd) => match sweep_cmd {
            SweepCommands::Ph {
                pco2,
                start,
                end,
                step,
                output,
            } => cmd_sweep_ph(pco2, start, end, step, output.as_deref()),
            SweepCommands::Hco3 {
                dic,
                start,
                factor,
                output,
            } => cmd_sweep_hco3(dic, start, factor, output.as_deref()),
        },
    }
}

#[derive(Serialize)]
struct SpeciationReport {
    pco2_atm: f64,
    ph: f64,
    co2aq_mol_per_l: f64,
    h2co3_mol_per_l: f64,
    hco3_mol_per_l: f64,
    co3_mol_per_l: f64,
}

impl SpeciationReport {
    fn from_system(system: &CarbonateSystem) -> Self {
        Self {
            pco2_atm: system.pco2_atm(),
            ph: system.ph(),
            co2aq_mol_per_l: system.co2aq_mol_per_l(),
            h2co3_mol_per_l: system.h2co3_mol_per_l(),
            hco3_mol_per_l: system.hco3_mol_per_l(),
            co3_mol_per_l: system.co3_mol_per_l(),
        }
    }
}

fn cmd_speciate(
    pco2: Option<f64>,
    ph: Option<f64>,
    hco3: Option<f64>,
    dic: Option<f64>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let gas_pair = pco2.is_some() || ph.is_some();
    let carbon_pair = hco3.is_some() || dic.is_some();

    let system = match (gas_pair, carbon_pair) {
        (true, true) => {
            return Err("give either --pco2/--ph or --hco3/--dic, not both".into());
        }
        (false, false) => {
            return Err("give one measured pair: --pco2/--ph or --hco3/--dic".into());
        }
        (true, false) => {
            let pco2 = Concentration::from_optional(CarbonSpecies::PCO2, pco2)?;
            let ph = Ph::from_optional(ph)?;
            CarbonateSystem::from_gas_and_ph(pco2, ph)?
        }
        (false, true) => {
            let hco3 = Concentration::from_optional(CarbonSpecies::HCO3, hco3)?;
            let dic = Concentration::from_optional(CarbonSpecies::DIC, dic)?;
            CarbonateSystem::from_hco3_and_dic(hco3, dic)?
        }
    };

    let report = SpeciationReport::from_system(&system);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("✓ Speciation complete");
        println!("  PCO2:    {:.6e} atm", report.pco2_atm);
        println!("  pH:      {:.4}", report.ph);
        println!("  CO2(aq): {:.6e} mol/L", report.co2aq_mol_per_l);
        println!("  H2CO3:   {:.6e} mol/L", report.h2co3_mol_per_l);
        println!("  HCO3-:   {:.6e} mol/L", report.hco3_mol_per_l);
        println!("  CO3--:   {:.6e} mol/L", report.co3_mol_per_l);
    }

    Ok(())
}

fn cmd_sweep_ph(
    pco2: f64,
    start: f64,
    end: f64,
    step: f64,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let range = SweepRange::linear(start, end, step)?;
    let sweep = sweep_ph_at_fixed_pco2(&range, pco2)?;
    tracing::debug!(
        samples = sweep.independent_values.len(),
        failed = sweep.num_failed,
        "pH sweep finished"
    );

    let mut csv = String::from("ph,h2co3_mol_per_l,hco3_mol_per_l,co3_mol_per_l\n");
    for (ph_value, system) in sweep.independent_values.iter().zip(&sweep.systems) {
        if let Some(sys) = system {
            csv.push_str(&format!(
                "{},{},{},{}\n",
                ph_value,
                sys.h2co3_mol_per_l(),
                sys.hco3_mol_per_l(),
                sys.co3_mol_per_l()
            ));
        }
    }

    write_series(&csv, &sweep, output)
}

fn cmd_sweep_hco3(
    dic: f64,
    start: f64,
    factor: f64,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let range = SweepRange::geometric(start, dic, factor)?;
    let sweep = sweep_hco3_at_fixed_dic(&range, dic)?;
    tracing::debug!(
        samples = sweep.independent_values.len(),
        failed = sweep.num_failed,
        "HCO3 sweep finished"
    );

    let mut csv = String::from("hco3_mol_per_l,pco2_atm\n");
    for (hco3_value, system) in sweep.independent_values.iter().zip(&sweep.systems) {
        if let Some(sys) = system {
            csv.push_str(&format!("{},{}\n", hco3_value, sys.pco2_atm()));
        }
    }

    write_series(&csv, &sweep, output)
}

fn write_series(
    csv: &str,
    sweep: &SpeciationSweep,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} data points to {} ({} samples failed)",
            sweep.num_successful,
            path.display(),
            sweep.num_failed
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}
