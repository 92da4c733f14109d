//! Hardware probes (CPU, temperature, memory, load, disk)

use crate::data::{DiskUsage, LoadAverage, MemoryFacts};
use crate::error::{BoardcheckError, Result};
use crate::probe::Probe;
use crate::utils::command::run_command;
use crate::utils::file::{read_file, read_first_line};
use crate::utils::parsing::{extract_after_colon, format_size};

pub fn cpu_model() -> Probe<String> {
    read_file("/proc/cpuinfo").map(|s| parse_cpu_model(&s)).into()
}

pub fn cpu_count() -> Probe<usize> {
    read_file("/proc/cpuinfo").map(|s| parse_cpu_count(&s)).into()
}

pub fn temperature() -> Probe<String> {
    read_soc_temperature().into()
}

pub fn load_average() -> Probe<LoadAverage> {
    read_first_line("/proc/loadavg")
        .and_then(|line| parse_load_average(&line))
        .into()
}

pub fn memory_facts() -> MemoryFacts {
    match read_file("/proc/meminfo") {
        Ok(content) => parse_meminfo(&content),
        Err(_) => MemoryFacts::unavailable(),
    }
}

pub fn root_disk_usage() -> Probe<DiskUsage> {
    read_root_disk_usage().into()
}

/// `model name` is absent from /proc/cpuinfo on many ARM SoCs; those boards
/// get a generic family string instead of a failed probe.
pub fn parse_cpu_model(cpuinfo: &str) -> String {
    for line in cpuinfo.lines() {
        if line.starts_with("model name") {
            if let Some(model) = extract_after_colon(line) {
                return model;
            }
        }
    }
    "ARM Processor".to_string()
}

pub fn parse_cpu_count(cpuinfo: &str) -> usize {
    cpuinfo
        .lines()
        .filter(|line| line.starts_with("processor"))
        .count()
}

fn read_soc_temperature() -> Result<String> {
    // vcgencmd is the vendor tool on Pi-family boards; the generic thermal
    // zone is the fallback everywhere else
    if let Ok(raw) = run_command("vcgencmd", &["measure_temp"]) {
        // output looks like `temp=48.3'C`
        if let Some(value) = raw.strip_prefix("temp=") {
            return Ok(value.to_string());
        }
        return Ok(raw);
    }

    let millidegrees = read_first_line("/sys/class/thermal/thermal_zone0/temp")?;
    let value: f64 = millidegrees
        .parse()
        .map_err(|_| BoardcheckError::Parse(format!("bad thermal reading: {}", millidegrees)))?;
    Ok(format!("{:.1}'C", value / 1000.0))
}

pub fn parse_load_average(line: &str) -> Result<LoadAverage> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(one), Some(five), Some(fifteen)) => Ok(LoadAverage {
            one: one.to_string(),
            five: five.to_string(),
            fifteen: fifteen.to_string(),
        }),
        _ => Err(BoardcheckError::Parse(format!(
            "short loadavg line: {}",
            line
        ))),
    }
}

/// Keep the kernel's kB figures verbatim; the report prints them unscaled.
pub fn parse_meminfo(meminfo: &str) -> MemoryFacts {
    let mut facts = MemoryFacts::unavailable();

    for line in meminfo.lines() {
        if line.starts_with("MemTotal:") {
            facts.total = kb_value(line);
        } else if line.starts_with("MemFree:") {
            facts.free = kb_value(line);
        } else if line.starts_with("MemAvailable:") {
            facts.available = kb_value(line);
        }
    }
    facts
}

fn kb_value(line: &str) -> Probe<String> {
    match line.split_whitespace().nth(1) {
        Some(value) => Probe::Known(format!("{} kB", value)),
        None => Probe::Unavailable,
    }
}

fn read_root_disk_usage() -> Result<DiskUsage> {
    if let Some(usage) = statvfs_root() {
        return Ok(usage);
    }

    // Fallback to df if the statvfs call fails
    let output = run_command("df", &["-h", "/"])?;
    parse_df_output(&output)
}

fn statvfs_root() -> Option<DiskUsage> {
    use std::ffi::CString;

    unsafe {
        let path = CString::new("/").ok()?;
        let mut stat: libc::statvfs = std::mem::zeroed();

        if libc::statvfs(path.as_ptr(), &mut stat) != 0 {
            return None;
        }

        let total_bytes = (stat.f_blocks as u64).wrapping_mul(stat.f_frsize as u64);
        let available_bytes = (stat.f_bavail as u64).wrapping_mul(stat.f_frsize as u64);
        let used_bytes = total_bytes.saturating_sub(available_bytes);

        Some(DiskUsage {
            total: format_size(total_bytes),
            used: format_size(used_bytes),
            available: format_size(available_bytes),
        })
    }
}

pub fn parse_df_output(output: &str) -> Result<DiskUsage> {
    for line in output.lines().skip(1) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() >= 4 {
            return Ok(DiskUsage {
                total: parts[1].to_string(),
                used: parts[2].to_string(),
                available: parts[3].to_string(),
            });
        }
    }
    Err(BoardcheckError::Parse("unrecognized df output".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PI_CPUINFO: &str = "\
processor\t: 0
BogoMIPS\t: 108.00
Features\t: fp asimd evtstrm crc32 cpuid

processor\t: 1
BogoMIPS\t: 108.00

processor\t: 2

processor\t: 3
";

    const X86_CPUINFO: &str = "\
processor\t: 0
vendor_id\t: GenuineIntel
model name\t: Intel(R) Celeron(R) N4020 CPU @ 1.10GHz

processor\t: 1
vendor_id\t: GenuineIntel
model name\t: Intel(R) Celeron(R) N4020 CPU @ 1.10GHz
";

    #[test]
    fn cpu_model_prefers_model_name_line() {
        assert_eq!(
            parse_cpu_model(X86_CPUINFO),
            "Intel(R) Celeron(R) N4020 CPU @ 1.10GHz"
        );
    }

    #[test]
    fn cpu_model_falls_back_on_arm() {
        assert_eq!(parse_cpu_model(PI_CPUINFO), "ARM Processor");
    }

    #[test]
    fn cpu_count_counts_processor_lines() {
        assert_eq!(parse_cpu_count(PI_CPUINFO), 4);
        assert_eq!(parse_cpu_count(X86_CPUINFO), 2);
        assert_eq!(parse_cpu_count(""), 0);
    }

    #[test]
    fn meminfo_values_keep_kb_figures_verbatim() {
        let meminfo = "\
MemTotal:        8000000 kB
MemFree:          712040 kB
MemAvailable:    5612180 kB
Buffers:          163588 kB
";
        let facts = parse_meminfo(meminfo);
        assert_eq!(facts.total.render(), "8000000 kB");
        assert_eq!(facts.free.render(), "712040 kB");
        assert_eq!(facts.available.render(), "5612180 kB");
    }

    #[test]
    fn missing_meminfo_fields_stay_unavailable() {
        let facts = parse_meminfo("MemTotal:        8000000 kB\n");
        assert_eq!(facts.total.render(), "8000000 kB");
        assert_eq!(facts.free.render(), "Unknown");
        assert_eq!(facts.available.render(), "Unknown");
    }

    #[test]
    fn loadavg_takes_first_three_fields() {
        let load = parse_load_average("0.52 0.58 0.59 1/257 4242").unwrap();
        assert_eq!(load.to_string(), "0.52 0.58 0.59");
    }

    #[test]
    fn short_loadavg_is_a_parse_error() {
        assert!(parse_load_average("0.52 0.58").is_err());
    }

    #[test]
    fn df_output_parses_figures() {
        let output = "\
Filesystem      Size  Used Avail Use% Mounted on
/dev/root        15G  3.1G   11G  23% /
";
        let usage = parse_df_output(output).unwrap();
        assert_eq!(usage.to_string(), "15G total, 3.1G used, 11G available");
    }

    #[test]
    fn empty_df_output_is_an_error() {
        assert!(parse_df_output("Filesystem Size\n").is_err());
    }
}
