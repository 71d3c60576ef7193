// Hotel Booking Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/hotel-sim --days 30 --seed 42
// ```

use clap::Parser;
use hotel_sim::inventory::{generate_inventory, Inventory};
use hotel_sim::reporting::{self, export_events};
use hotel_sim::simulation::{run_simulation, LoggingConfig, RunReport, SimulationResults};
use hotel_sim::types::{CliArgs, HotelId, SimulationConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = SimulationConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Hotel Booking Simulator");

    // Load configuration from CLI arguments and optional config file
    let config = match SimulationConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    print_startup_banner(&config);

    let mut inventory = match initialize_inventory(&config) {
        Ok(inventory) => inventory,
        Err(e) => {
            error!("Failed to initialize inventory: {}", e);
            process::exit(1);
        }
    };

    info!("Starting simulation");
    if let Err(e) = run(&config, &mut inventory) {
        error!("Simulation failed: {}", e);
        process::exit(1);
    }

    info!("Hotel Booking Simulator completed successfully");
}

/// Generate the seeded starting inventory
fn initialize_inventory(config: &SimulationConfig) -> Result<Inventory, String> {
    eprintln!("Generating room inventory...");
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let inventory = generate_inventory(config, &mut rng);

    info!(
        "Generated {} rooms across {} floors",
        inventory.room_count(),
        config.total_floors
    );
    Ok(inventory)
}

/// Run the simulation and print the final reports
fn run(config: &SimulationConfig, inventory: &mut Inventory) -> Result<(), String> {
    eprintln!("Simulating {} days...", config.days);
    let results = run_simulation(config, inventory, HotelId(1))
        .map_err(|e| format!("Simulation run failed: {}", e))?;
    eprintln!("Simulation completed!");

    print_final_results(&results);
    print_hotel_reports(inventory);

    if let Some(path) = &config.events_output {
        eprintln!("Exporting event log...");
        export_events(path, &results.events, config.output_format)
            .map_err(|e| format!("Failed to export event log: {}", e))?;
        eprintln!("Event log written to: {}", path);
    }

    Ok(())
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Hotel Booking Simulator");
    eprintln!("=======================");
    eprintln!("Drives a room inventory through simulated days of booking demand");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Days: {}", config.days);
    eprintln!("  Start Date: {}", config.start_date);
    eprintln!("  Rooms: {} across {} floors", config.total_rooms, config.total_floors);
    eprintln!("  Standard Booking %: {:.1}%", config.standard_booking_probability * 100.0);
    eprintln!("  Walk-in %: {:.1}%", config.walk_in_probability * 100.0);
    eprintln!("  Group Booking %: {:.1}%", config.group_booking_probability * 100.0);
    eprintln!("  Extended Stay %: {:.1}%", config.extended_stay_probability * 100.0);
    eprintln!("  Loyalty Booking %: {:.1}%", config.loyalty_booking_probability * 100.0);
    eprintln!("  Special Request %: {:.1}%", config.special_request_probability * 100.0);
    eprintln!("  Cancellation %: {:.1}%", config.cancellation_probability * 100.0);
    eprintln!("  Tax Rate: {:.1}%", config.tax_rate * 100.0);
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}

/// Print the accumulated run statistics
fn print_final_results(results: &SimulationResults) {
    eprintln!();
    eprintln!("Simulation Results:");
    eprintln!("  Days Simulated: {}", results.total_days);
    eprintln!("  Guests: {}", results.total_guests);
    eprintln!("  Reservations: {}", results.total_reservations);
    eprintln!("  Walk-ins: {}", results.total_walk_ins);
    eprintln!("  Group Bookings: {}", results.total_group_bookings);
    eprintln!("  Extended Stays: {}", results.total_extended_stays);
    eprintln!("  Loyalty Bookings: {}", results.total_loyalty_bookings);
    eprintln!("  Special Requests: {}", results.total_special_requests);
    eprintln!("  Cancellations: {}", results.total_cancellations);
    eprintln!("  Total Revenue: ${:.2}", results.total_revenue);
    eprintln!("  Ancillary Revenue: ${:.2}", results.ancillary_revenue);
    eprintln!("  Average Occupancy: {:.2}%", results.occupancy_rate);

    let report = RunReport::from_results(results);
    if let Some((day, rate)) = report.peak_occupancy {
        eprintln!("  Peak Occupancy: {:.2}% on day {}", rate, day);
    }
    eprintln!("  Busy Days (3+ check-ins): {}", report.busy_days.len());
    eprintln!("  Slow Days (<=2 events): {}", report.slow_days.len());
}

/// Print the end-of-run hotel status and financial reports
fn print_hotel_reports(inventory: &Inventory) {
    let status = reporting::hotel_status(inventory);
    eprintln!();
    eprintln!("Hotel Status ({} as of {}):", status.hotel_name, status.as_of);
    for (room_status, count) in &status.rooms_by_status {
        eprintln!("  {} rooms: {}", room_status, count);
    }
    eprintln!("  In-house Stays: {}", status.in_house);
    eprintln!("  Upcoming Arrivals: {}", status.upcoming_arrivals);
    eprintln!("  Occupancy: {:.2}%", status.occupancy_rate);

    let summary = reporting::financial_summary(inventory);
    eprintln!();
    eprintln!("Financials:");
    eprintln!("  Realized Revenue: ${:.2}", summary.realized_revenue);
    eprintln!("  Upcoming Revenue: ${:.2}", summary.upcoming_revenue);
    eprintln!("  Average Daily Rate: ${:.2}", summary.average_daily_rate);
    eprintln!("  Revenue per Available Room: ${:.2}", summary.revenue_per_available_room);
}
