pub fn format_percent(value: f64) -> String {
	format_percent_with_precision(value, 1)
}

/// Ties round away from zero, so 0.0625 formats as 6.3%.
pub fn format_percent_with_precision(value: f64, precision: usize) -> String {
	let scale = 10f64.powi(precision as i32);
	let percent = (value * 100.0 * scale).round() / scale;
	format!("{:.1$}%", percent, precision)
}

#[test]
fn test_format_percent() {
	assert_eq!(format_percent(0.0), "0.0%");
	assert_eq!(format_percent(0.82), "82.0%");
	assert_eq!(format_percent(0.35), "35.0%");
	assert_eq!(format_percent(0.42429), "42.4%");
	assert_eq!(format_percent_with_precision(0.424292, 3), "42.429%");
	assert_eq!(format_percent(1.0), "100.0%");
	assert_eq!(format_percent(0.0625), "6.3%");
	assert_eq!(format_percent(0.3125), "31.3%");
	assert_eq!(format_percent(0.6875), "68.8%");
}
