mod config;
mod error;
mod library;
mod probe;
mod progress;
mod report;
mod runtime;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
