//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js renderers live in `assets/js/*.js` and are evaluated as globals
//! (no ES modules), exposed via `window.*`. This module provides safe Rust
//! wrappers that hand them the payload and config JSON. The renderers are
//! the out-of-scope external collaborators: Rust passes the payload through
//! verbatim and they pick out the selected category themselves.

// Embed the D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static US_MAP_JS: &str = include_str!("../assets/js/us-map.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('NDP JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define `renderDisasterMap(...)` and friends via
/// `function` declarations. To make them globally accessible (not
/// block-scoped inside the setInterval callback), they are evaluated at
/// global scope via indirect eval once D3 is ready, then each function is
/// explicitly promoted to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, US_MAP_JS, BAR_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__ndpChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__ndpChartScripts);
                    delete window.__ndpChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderDisasterMap !== 'undefined') window.renderDisasterMap = renderDisasterMap;
                    if (typeof renderDisasterBarChart !== 'undefined') window.renderDisasterBarChart = renderDisasterBarChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__ndpChartsReady = true;
                    console.log('NDP charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the U.S. map for the selected category.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_disaster_map(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__ndpChartsReady &&
                    typeof window.renderDisasterMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderDisasterMap('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[NDP] renderDisasterMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the bar chart for the selected category.
///
/// Same polling discipline as [`render_disaster_map`].
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__ndpChartsReady &&
                    typeof window.renderDisasterBarChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderDisasterBarChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[NDP] renderDisasterBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
