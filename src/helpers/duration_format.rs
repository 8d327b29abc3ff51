/// Formats milliseconds as `"<minutes>m <seconds>s"`, truncating toward zero.
pub fn duration_string(ms: f64) -> String {
    if !ms.is_finite() {
        return "n/a".to_string();
    }
    let total_secs = (ms / 1000.0).floor() as i64;
    let minutes = total_secs.div_euclid(60);
    let seconds = total_secs.rem_euclid(60);
    format!("{}m {}s", minutes, seconds)
}
