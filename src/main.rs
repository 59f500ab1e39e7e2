use clap::Parser;
use rppal::gpio::Gpio;
use sonar_sweep::adapters::{hc_sr04::HcSr04, sg90::Sg90};
use sonar_sweep::utils::{logger, validation::Validate};
use sonar_sweep::{
    CliConfig, RadarEngine, RadarServer, RigConfig, SimulatedSensor, SimulatedServo, Sweep,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sonar-sweep");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let server = RadarServer::bind(&config.bind_addr()).await?;
    tracing::info!("WebSocket server listening on port {}", config.port);

    let sweep = Sweep::new(config.step_degrees());

    if config.simulate {
        tracing::info!("Running with simulated hardware");
        let engine = RadarEngine::new(
            SimulatedSensor::new(),
            SimulatedServo::new(),
            sweep,
            config.interval(),
        );
        server.run(engine).await?;
    } else {
        let gpio = Gpio::new()?;
        let sensor = HcSr04::new(&gpio, config.trigger_pin(), config.echo_pin())?;
        let servo = Sg90::new(&gpio, config.servo_pin())?;
        tracing::info!(
            "GPIO rig claimed (trigger {}, echo {}, servo {})",
            config.trigger_pin(),
            config.echo_pin(),
            config.servo_pin()
        );
        let engine = RadarEngine::new(sensor, servo, sweep, config.interval());
        server.run(engine).await?;
    }

    Ok(())
}
