use crate::core::error::AppError;

pub fn parse_int(name: &str, raw: &str) -> Result<i64, AppError> {
    raw.trim().parse::<i64>().map_err(|_| {
        AppError::validation(format!(
            "parameter `{name}` must be an integer, received `{raw}`"
        ))
    })
}

pub fn check_int(name: &str, raw: &str) -> Result<(), AppError> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(AppError::validation(format!(
            "parameter `{name}` must be an integer, received `{raw}`"
        )));
    }

    Ok(())
}

pub fn parse_int_list(name: &str, raw: &str) -> Result<Vec<i64>, AppError> {
    raw.split(',').map(|segment| parse_int(name, segment)).collect()
}
