use flowdose_core::VolumeUnit;

/// One line of operator input. Amounts are in the active display unit;
/// conversion to milliliters happens in the session, not here.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleInput {
    Dispense(f64),
    /// 0-based preset index.
    DispensePreset(usize),
    Pause,
    Resume,
    Stop,
    Unit(VolumeUnit),
    Presets([f64; 4]),
    Wifi { ssid: String, password: String },
    Calibration(f64),
    Status,
    Help,
    Quit,
}

impl ConsoleInput {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or_else(|| "empty command".to_string())?;
        let rest: Vec<&str> = words.collect();

        match verb {
            "start" => Ok(Self::Dispense(parse_amount(&rest, "start <amount>")?)),
            "preset" => {
                let n: usize = single_arg(&rest, "preset <1-4>")?
                    .parse()
                    .map_err(|_| "preset number must be 1-4".to_string())?;
                if (1..=4).contains(&n) {
                    Ok(Self::DispensePreset(n - 1))
                } else {
                    Err("preset number must be 1-4".to_string())
                }
            }
            "pause" => Ok(Self::Pause),
            "resume" => Ok(Self::Resume),
            "stop" => Ok(Self::Stop),
            "unit" => match single_arg(&rest, "unit ml|l")? {
                "ml" => Ok(Self::Unit(VolumeUnit::Milliliters)),
                "l" => Ok(Self::Unit(VolumeUnit::Liters)),
                other => Err(format!("unknown unit '{}', expected ml or l", other)),
            },
            "presets" => {
                if rest.len() != 4 {
                    return Err("usage: presets <a> <b> <c> <d>".to_string());
                }
                let mut values = [0.0; 4];
                for (slot, word) in values.iter_mut().zip(&rest) {
                    *slot = word
                        .parse()
                        .map_err(|_| format!("'{}' is not a number", word))?;
                }
                Ok(Self::Presets(values))
            }
            "wifi" => {
                if rest.is_empty() {
                    return Err("usage: wifi <ssid> [password]".to_string());
                }
                Ok(Self::Wifi {
                    ssid: rest[0].to_string(),
                    password: rest.get(1).copied().unwrap_or_default().to_string(),
                })
            }
            "cal" => Ok(Self::Calibration(parse_amount(&rest, "cal <pulses-per-liter>")?)),
            "status" => Ok(Self::Status),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command '{}', try 'help'", other)),
        }
    }
}

fn single_arg<'a>(rest: &[&'a str], usage: &str) -> Result<&'a str, String> {
    match rest {
        &[only] => Ok(only),
        _ => Err(format!("usage: {}", usage)),
    }
}

fn parse_amount(rest: &[&str], usage: &str) -> Result<f64, String> {
    single_arg(rest, usage)?
        .parse()
        .map_err(|_| format!("usage: {}", usage))
}
