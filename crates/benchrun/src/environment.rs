//! Host description and CPU pinning.

use benchrun_core::BenchError;

/// CPU model string of the first core, empty if unknown.
#[must_use]
pub fn cpu_model() -> String {
    use sysinfo::System;
    let sys = System::new_all();
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .unwrap_or_default()
}

/// Number of logical CPUs visible to the process.
#[must_use]
pub fn logical_cpus() -> usize {
    std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
}

/// Log the host the run happens on. Querying the CPU model is slow, so it
/// only happens when info logging is enabled.
pub fn log_host() {
    if tracing::enabled!(tracing::Level::INFO) {
        tracing::info!(
            cpu = %cpu_model(),
            logical_cpus = logical_cpus(),
            version = %crate::version::full_version(),
            "host"
        );
    }
}

/// Pin the current thread to the CPU with the given index.
pub fn pin_to_cpu(index: usize) -> Result<(), BenchError> {
    let cores = core_affinity::get_core_ids()
        .ok_or_else(|| BenchError::Config("cannot query the CPU list".into()))?;
    let core = cores
        .into_iter()
        .find(|core| core.id == index)
        .ok_or_else(|| BenchError::Config(format!("no CPU with index {index}")))?;
    if !core_affinity::set_for_current(core) {
        return Err(BenchError::Config(format!("cannot pin to CPU {index}")));
    }
    tracing::info!(cpu = index, "pinned to CPU");
    Ok(())
}
