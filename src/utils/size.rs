use anyhow::{anyhow, ensure, Result};

pub mod unit_multiplier {
    use anyhow::{bail, Result};

    // order matters here, bytes have to be last because all other end with it
    pub const BYTE_UNITS: [&str; 5] = ["TB", "GB", "MB", "KB", "B"];
    pub const B: u64 = 1;
    pub const KB: u64 = 1024;
    pub const MB: u64 = 1024 * 1024;
    pub const GB: u64 = 1024 * 1024 * 1024;
    pub const TB: u64 = 1024 * 1024 * 1024 * 1024;

    pub fn from_str(unit: &str) -> Result<u64> {
        match unit {
            "TB" => Ok(TB),
            "GB" => Ok(GB),
            "MB" => Ok(MB),
            "KB" => Ok(KB),
            "B" => Ok(B),
            _ => bail!("Invalid unit: {unit}"),
        }
    }
}

pub fn parse_size(size: &str) -> Result<u64> {
    let mut size = size.trim().to_uppercase();

    // so stuff doesn't break
    if size.ends_with(['T', 'G', 'M', 'K']) {
        size = format!("{size}B");
    }

    let Some(unit) = unit_multiplier::BYTE_UNITS
        .iter()
        .find(|unit| size.ends_with(*unit))
    else {
        return Err(anyhow!("Invalid size unit: {size}"));
    };

    let Ok(size) = size[..size.len() - unit.len()].trim().parse::<u64>() else {
        return Err(anyhow!("Invalid size: {size}"));
    };

    Ok(size * unit_multiplier::from_str(unit)?)
}

/// Parses `size` and expresses it in `unit` (one of the `BYTE_UNITS`). A bare
/// number is taken to already be in `unit`.
pub fn parse_size_as(size: &str, unit: &str) -> Result<u64> {
    let factor = unit_multiplier::from_str(unit)?;
    let trimmed = size.trim();

    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Ok(trimmed.parse::<u64>()?);
    }

    let bytes = parse_size(trimmed)?;

    ensure!(
        bytes % factor == 0,
        "Size `{size}` is not a whole number of {unit}"
    );

    Ok(bytes / factor)
}

pub fn user_friendly_size(size: u64) -> Result<String> {
    for unit in unit_multiplier::BYTE_UNITS {
        let factor = unit_multiplier::from_str(unit)?;

        if size < factor || size % factor != 0 {
            continue;
        }

        return Ok(format!("{}{unit}", size / factor));
    }

    Ok(String::from("0B"))
}
