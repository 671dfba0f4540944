// HTML rendering for the dashboard regions and page
use crate::application::dashboard_page::DashboardPage;
use crate::domain::quality::classify;
use crate::domain::reading::DailyReading;

pub const UNIT: &str = "µg/m³";

pub const LOADING: &str = "Loading…";
pub const TODAY_NO_DATA: &str = "No data available for today.";
pub const TODAY_LOAD_FAILED: &str = "Unable to load today's air quality.";
pub const DAILY_NO_DATA: &str = "No daily data available.";
pub const DAILY_LOAD_FAILED: &str = "Unable to load daily history.";

const TABLE_COLUMNS: usize = 4;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Today summary: date, the three pollutants with units, and the verdict.
pub fn today_summary(reading: &DailyReading) -> String {
    let verdict = classify(reading.pm2_5_avg);

    format!(
        r#"<strong>Date:</strong> {date}<br>
PM2.5: {pm25} {unit}<br>
PM10: {pm10} {unit}<br>
NO₂: {no2} {unit}<br>
<strong>Air quality:</strong> <span style="color: {color}">{label}</span>"#,
        date = html_escape(&reading.date),
        pm25 = reading.pm2_5_avg,
        pm10 = reading.pm10_avg,
        no2 = reading.nitrogen_dioxide_avg,
        unit = UNIT,
        color = verdict.color,
        label = verdict.label,
    )
}

pub fn message(text: &str) -> String {
    html_escape(text)
}

pub fn loading_message() -> String {
    message(LOADING)
}

/// One `<tr>` per reading, columns date, PM2.5, PM10, NO₂.
pub fn daily_rows(readings: &[DailyReading]) -> String {
    readings
        .iter()
        .map(|r| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                html_escape(&r.date),
                r.pm2_5_avg,
                r.pm10_avg,
                r.nitrogen_dioxide_avg
            )
        })
        .collect()
}

/// A single full-width row carrying an informational message.
pub fn message_row(text: &str) -> String {
    format!(
        "<tr><td colspan=\"{}\">{}</td></tr>\n",
        TABLE_COLUMNS,
        html_escape(text)
    )
}

pub fn loading_row() -> String {
    message_row(LOADING)
}

/// Full page. The chart config is inlined as a script literal, so any `</`
/// coming from API labels is broken up to keep the script element intact.
pub fn render_page(page: &DashboardPage, refresh_secs: u64) -> String {
    let chart_json = page
        .chart_config()
        .and_then(|config| serde_json::to_string(config).ok())
        .unwrap_or_else(|| "null".to_string())
        .replace("</", "<\\/");

    let refreshed = page
        .refreshed_at()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".to_string());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta http-equiv="refresh" content="{refresh_secs}">
    <title>Air Quality</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
</head>
<body>
    <h1>Air Quality</h1>
    <section>
        <h2>Today</h2>
        <div id="today">{today}</div>
    </section>
    <section>
        <h2>Daily history</h2>
        <table>
            <thead>
                <tr><th>Date</th><th>PM2.5</th><th>PM10</th><th>NO₂</th></tr>
            </thead>
            <tbody id="daily-table">
{table}            </tbody>
        </table>
    </section>
    <section>
        <canvas id="chart"></canvas>
    </section>
    <footer>Last refreshed: {refreshed}</footer>
    <script>
        const config = {chart_json};
        if (config !== null && window.Chart) {{
            new Chart(document.getElementById("chart"), config);
        }}
    </script>
</body>
</html>"#,
        refresh_secs = refresh_secs,
        today = page.today().markup(),
        table = page.daily_table().markup(),
        refreshed = refreshed,
        chart_json = chart_json,
    )
}
