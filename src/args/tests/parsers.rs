use super::*;

#[test]
fn parse_header_valid() -> AppResult<()> {
    let parsed = parse_header("Content-Type: application/json");
    match parsed {
        Ok((key, value)) => {
            if key != "Content-Type" {
                return Err(AppError::validation(format!("Unexpected key: {}", key)));
            }
            if value != "application/json" {
                return Err(AppError::validation(format!("Unexpected value: {}", value)));
            }
            Ok(())
        }
        Err(err) => Err(AppError::validation(format!(
            "Expected Ok, got Err: {}",
            err
        ))),
    }
}

#[test]
fn parse_header_invalid() -> AppResult<()> {
    if parse_header("MissingDelimiter").is_err() {
        Ok(())
    } else {
        Err(AppError::validation("Expected Err for invalid header"))
    }
}

#[test]
fn parse_duration_units() -> AppResult<()> {
    let cases = [
        ("5", Duration::from_secs(5)),
        ("250ms", Duration::from_millis(250)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_arg(input)?;
        if parsed != expected {
            return Err(AppError::validation(format!(
                "Unexpected duration for {}: {:?}",
                input, parsed
            )));
        }
    }
    Ok(())
}

#[test]
fn parse_duration_rejects_zero_and_bad_units() -> AppResult<()> {
    for input in ["0s", "", "s", "10d"] {
        if parse_duration_arg(input).is_ok() {
            return Err(AppError::validation(format!(
                "Expected Err for duration '{}'",
                input
            )));
        }
    }
    Ok(())
}

#[test]
fn positive_usize_rejects_zero() -> AppResult<()> {
    if "0".parse::<PositiveUsize>().is_ok() {
        return Err(AppError::validation("Expected zero to be rejected"));
    }
    let parsed = "3".parse::<PositiveUsize>()?;
    if parsed.get() != 3 {
        return Err(AppError::validation("Expected 3"));
    }
    Ok(())
}
