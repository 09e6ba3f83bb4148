use crate::domain::{QuotePoint, Symbol};

/// What the label row is currently showing. The chart canvas is tracked
/// separately so an error leaves the previous plot on screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) enum ViewState {
    #[default]
    Idle,
    Rendered {
        label: String,
    },
    Error,
}

/// The plotted series: x = epoch seconds, y = close price, ascending by time.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChartSeries {
    pub(crate) symbol: String,
    pub(crate) points: Vec<[f64; 2]>,
}

impl ChartSeries {
    /// Build from a filtered window. Provider order is whatever it is; the
    /// line is drawn left to right, so sort here.
    pub(crate) fn from_window(symbol: Symbol, window: &[QuotePoint]) -> Self {
        let mut points: Vec<[f64; 2]> = window
            .iter()
            .map(|p| [p.timestamp_ms as f64 / 1000.0, p.close])
            .collect();
        points.sort_by(|a, b| a[0].total_cmp(&b[0]));
        Self {
            symbol: symbol.to_string(),
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::TimeUtils;

    #[test]
    fn chart_points_sorted_ascending() {
        let window = [
            QuotePoint {
                timestamp_ms: 2 * TimeUtils::MS_IN_MIN,
                close: 101.0,
            },
            QuotePoint {
                timestamp_ms: TimeUtils::MS_IN_MIN,
                close: 99.0,
            },
        ];
        let chart = ChartSeries::from_window(Symbol::MSFT, &window);
        assert_eq!(chart.symbol, "MSFT");
        assert_eq!(chart.points, vec![[60.0, 99.0], [120.0, 101.0]]);
    }

    #[test]
    fn same_window_builds_identical_chart() {
        let window = [QuotePoint {
            timestamp_ms: TimeUtils::MS_IN_MIN,
            close: 99.0,
        }];
        let a = ChartSeries::from_window(Symbol::AAPL, &window);
        let b = ChartSeries::from_window(Symbol::AAPL, &window);
        assert_eq!(a, b);
    }
}
