//! Built-in fixture set: 12 equity alerts, 8 F&O contracts, 6 IPOs.
//!
//! The numbers are illustrative output of an analytics pipeline that runs
//! elsewhere. Record order is the display order.

use crate::domain::{
    BoardType, ContractType, Exchange, FnOContract, IpoListing, IpoRating, IpoStatus, Sector,
    Signal, StockAlert, Strategy, StrategyAnalysis,
};

/// Prices for one alert: (current, target, stop loss).
type Levels = (f64, f64, f64);

/// Market move for one alert: (change, change %, rsi, volume, timestamp).
type Tape = (f64, f64, f64, &'static str, &'static str);

/// (z, weighted, ml, nn, long, short, calmar, sharpe, max dd, annual)
type Analysis = (f64, f64, f64, f64, f64, f64, f64, f64, f64, f64);

#[allow(clippy::too_many_arguments)]
fn alert(
    id: &str,
    symbol: &str,
    name: &str,
    sector: Sector,
    signal: Signal,
    strategy: Strategy,
    quantity: u32,
    confidence: u8,
    levels: Levels,
    tape: Tape,
    expected_return: f64,
    a: Analysis,
    reason: &str,
) -> StockAlert {
    let (current_price, target_price, stop_loss) = levels;
    let (change, change_percent, rsi, volume, timestamp) = tape;
    StockAlert {
        id: id.into(),
        symbol: symbol.into(),
        name: name.into(),
        exchange: Exchange::Nse,
        current_price,
        target_price,
        stop_loss,
        signal,
        strategy,
        quantity,
        confidence,
        change,
        change_percent,
        rsi,
        volume: volume.into(),
        timestamp: timestamp.into(),
        reason: reason.into(),
        sector,
        analysis: StrategyAnalysis {
            iqr_z_score: a.0,
            weighted_signal: a.1,
            ml_confidence: a.2,
            nn_probability: a.3,
            long_threshold: a.4,
            short_threshold: a.5,
            calmar_ratio: a.6,
            sharpe_ratio: a.7,
            max_drawdown: a.8,
            annual_return: a.9,
        },
        expected_return,
    }
}

pub fn stock_alerts() -> Vec<StockAlert> {
    use Sector::*;
    use Signal::*;
    use Strategy::*;

    vec![
        alert(
            "1", "RELIANCE", "Reliance Industries Ltd", Energy, Buy, NeuralNet, 15, 92,
            (2847.50, 3135.00, 2790.00),
            (42.30, 1.51, 42.0, "12.4M", "2 min ago"),
            10.1,
            (-1.8, 0.72, 0.82, 0.78, 0.56, 0.45, 8.2, 3.4, -2.1, 28.5),
            "NN probability 0.78 > Long Threshold 0.56. IQR Z-Score at -1.8 confirming mean reversion. ML ensemble agrees at 82% confidence. Expected 10.1% daily return after 2bps cost.",
        ),
        alert(
            "2", "TCS", "Tata Consultancy Services", It, Sell, IqrZscore, 8, 88,
            (3892.15, 3500.00, 3970.00),
            (-67.85, -1.71, 76.0, "5.8M", "5 min ago"),
            12.3,
            (2.4, -0.65, 0.79, 0.38, 0.65, 0.45, 6.8, 3.1, -3.2, 22.1),
            "IQR Z-Score at +2.4 (>2 threshold): overbought mean reversion trigger. NN short threshold breached at p=0.38 < 0.45. Weighted signal -0.65. Target 10% correction.",
        ),
        alert(
            "3", "INFY", "Infosys Ltd", It, Buy, MlEnsemble, 25, 86,
            (1567.40, 1750.00, 1530.00),
            (18.90, 1.22, 38.0, "8.2M", "8 min ago"),
            11.6,
            (-1.5, 0.58, 0.87, 0.71, 0.56, 0.45, 9.1, 3.8, -1.8, 31.2),
            "CatBoost ensemble 87% confidence (>65% filter). Morning volatility features confirm bullish EOD direction. IQR Z at -1.5 supports. Expected 11.6% daily return.",
        ),
        alert(
            "4", "HDFCBANK", "HDFC Bank Ltd", Banking, Hold, Hybrid, 0, 52,
            (1685.20, 1685.20, 1685.20),
            (3.10, 0.18, 52.0, "9.1M", "12 min ago"),
            0.0,
            (0.3, 0.08, 0.54, 0.51, 0.56, 0.45, 2.1, 0.8, -4.5, 5.2),
            "NN probability 0.51 in neutral zone (0.45 < p < 0.56). IQR Z at 0.3: no mean reversion signal. ML ensemble at 54% below 65% filter. No trade recommended.",
        ),
        alert(
            "5", "TATAMOTORS", "Tata Motors Ltd", Auto, Buy, NeuralNet, 30, 95,
            (945.75, 1090.00, 920.00),
            (28.45, 3.10, 35.0, "18.7M", "1 min ago"),
            15.2,
            (-2.3, 0.91, 0.93, 0.89, 0.56, 0.45, 12.1, 4.5, -1.2, 34.6),
            "NN probability 0.89 >> LT 0.56. All 5 models agree on BUY. IQR Z at -2.3 (<-2 threshold). Volume 2.5x avg confirms institutional buying. Calmar 12.1. Expected 15.2% daily.",
        ),
        alert(
            "6", "WIPRO", "Wipro Ltd", It, Sell, WeightedLinear, 40, 81,
            (478.30, 430.00, 500.00),
            (-12.60, -2.57, 68.0, "6.3M", "15 min ago"),
            10.8,
            (2.1, -0.78, 0.76, 0.32, 0.65, 0.45, 7.5, 2.9, -3.8, 19.4),
            "Weighted linear signal -0.78 with high correlation features bearish. NN p=0.32 < ST 0.45 confirms short. IQR Z at +2.1 overbought. Post-cost expected 10.8% daily return.",
        ),
        alert(
            "7", "ICICIBANK", "ICICI Bank Ltd", Banking, Buy, Hybrid, 20, 90,
            (1124.80, 1260.00, 1090.00),
            (15.20, 1.37, 32.0, "11.5M", "3 min ago"),
            13.5,
            (-2.1, 0.82, 0.88, 0.81, 0.56, 0.45, 10.8, 4.1, -1.5, 32.8),
            "Hybrid signal: IQR Z-Score -2.1 (mean reversion BUY) + NN directional confidence 0.81. CatBoost 88% bullish. Sharpe 4.1, strongest risk-adjusted signal today. Expected 13.5%.",
        ),
        alert(
            "8", "ADANIENT", "Adani Enterprises Ltd", Infra, Sell, MlEnsemble, 5, 84,
            (2890.00, 2610.00, 2980.00),
            (-95.40, -3.20, 72.0, "14.2M", "7 min ago"),
            14.1,
            (2.8, -0.85, 0.84, 0.29, 0.65, 0.35, 9.4, 3.7, -2.9, 27.3),
            "ML ensemble 84% bearish with XGBoost leading. NN p=0.29 < ST 0.35. IQR Z +2.8 extreme overbought. Max drawdown risk only -2.9%. Expected 14.1% daily on short.",
        ),
        alert(
            "9", "SUNPHARMA", "Sun Pharmaceutical", Pharma, Buy, IqrZscore, 18, 87,
            (1245.60, 1400.00, 1210.00),
            (22.10, 1.81, 45.0, "7.1M", "4 min ago"),
            12.4,
            (-2.2, 0.67, 0.81, 0.74, 0.56, 0.45, 8.9, 3.5, -2.4, 26.1),
            "IQR Z-Score at -2.2 triggered mean reversion BUY. Weighted signal 0.67 confirms. NN agrees at p=0.74 > LT. Morning features show bullish EOD direction. Expected 12.4%.",
        ),
        alert(
            "10", "HINDUNILVR", "Hindustan Unilever", Fmcg, Sell, NeuralNet, 10, 83,
            (2534.90, 2280.00, 2590.00),
            (-31.20, -1.22, 71.0, "3.9M", "10 min ago"),
            10.5,
            (1.9, -0.58, 0.72, 0.31, 0.65, 0.45, 6.2, 2.6, -4.1, 18.7),
            "NN probability 0.31 < Short Threshold 0.45. IQR Z at +1.9 approaching overbought. Weighted signal -0.58. Post 2bps cost, expected 10.5% daily return on short position.",
        ),
        alert(
            "11", "TATASTEEL", "Tata Steel Ltd", Metals, Buy, Hybrid, 100, 93,
            (145.30, 168.00, 140.00),
            (4.80, 3.42, 38.0, "22.1M", "1 min ago"),
            16.8,
            (-2.5, 0.88, 0.91, 0.87, 0.56, 0.45, 11.5, 4.3, -1.3, 34.2),
            "Hybrid signal strongest today: IQR Z -2.5 + NN 0.87 + ML 91%. All models converge. Calmar 11.5, Sharpe 4.3. FII buying + China stimulus. Expected 16.8% daily return.",
        ),
        alert(
            "12", "BAJFINANCE", "Bajaj Finance Ltd", Banking, Buy, WeightedLinear, 4, 85,
            (7120.00, 7900.00, 6950.00),
            (85.50, 1.22, 41.0, "4.5M", "6 min ago"),
            11.0,
            (-1.7, 0.74, 0.83, 0.69, 0.56, 0.45, 7.8, 3.2, -2.8, 24.5),
            "Weighted linear signal 0.74 (high correlation PB features). NN p=0.69 > LT 0.56. ML 83% bullish. Support zone confirmed by IQR Z -1.7. Expected 11.0% daily return.",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn contract(
    id: &str,
    symbol: &str,
    name: &str,
    contract_type: ContractType,
    strike_price: f64,
    ltp: f64,
    change: (f64, f64),
    oi: (&str, &str, &str),
    iv: f64,
    signal: Signal,
    lots: (u32, u32),
    confidence: u8,
    reason: &str,
) -> FnOContract {
    let (oi, oi_change, volume) = oi;
    let (lot_size, lots) = lots;
    FnOContract {
        id: id.into(),
        symbol: symbol.into(),
        name: name.into(),
        contract_type,
        expiry: "27 Feb 2026".into(),
        strike_price,
        ltp,
        change: change.0,
        change_percent: change.1,
        oi: oi.into(),
        oi_change: oi_change.into(),
        volume: volume.into(),
        iv,
        signal,
        lot_size,
        lots,
        confidence,
        reason: reason.into(),
    }
}

pub fn fno_contracts() -> Vec<FnOContract> {
    use ContractType::*;
    use Signal::*;

    vec![
        contract(
            "f1", "NIFTY", "NIFTY 50 Index", Call, 22200.0, 185.40,
            (32.50, 21.27), ("1.2Cr", "+12.5L", "45.2L"), 14.2, Buy, (25, 4), 85,
            "High OI buildup at 22000 PE. NIFTY likely to sustain above 22100.",
        ),
        contract(
            "f2", "BANKNIFTY", "Bank NIFTY Index", Put, 47000.0, 342.80,
            (-87.20, -20.27), ("85.3L", "-5.2L", "32.1L"), 16.8, Sell, (15, 2), 78,
            "PUT unwinding at 47000. Bank NIFTY showing strength above support.",
        ),
        contract(
            "f3", "RELIANCE", "Reliance Industries", Future, 0.0, 2855.60,
            (48.30, 1.72), ("52.4L", "+8.1L", "18.7L"), 0.0, Buy, (250, 2), 82,
            "Long buildup with 15% OI increase. Futures premium expanding.",
        ),
        contract(
            "f4", "NIFTY", "NIFTY 50 Index", Put, 21800.0, 98.50,
            (-24.30, -19.80), ("95.1L", "+18.3L", "52.8L"), 15.1, Buy, (25, 6), 90,
            "Massive PUT writing at 21800. Strong support building for NIFTY.",
        ),
        contract(
            "f5", "TCS", "Tata Consultancy Services", Call, 3900.0, 62.30,
            (-18.50, -22.89), ("12.8L", "+3.2L", "5.4L"), 18.5, Sell, (175, 1), 71,
            "CALL writing at 3900 strike. Resistance expected near earnings.",
        ),
        contract(
            "f6", "TATAMOTORS", "Tata Motors Ltd", Call, 960.0, 24.70,
            (8.90, 56.33), ("28.5L", "+6.8L", "14.2L"), 32.1, Buy, (575, 3), 86,
            "OI addition with price surge. Short covering rally expected above 960.",
        ),
        contract(
            "f7", "HDFCBANK", "HDFC Bank Ltd", Future, 0.0, 1688.40,
            (-5.20, -0.31), ("44.2L", "-2.1L", "12.6L"), 0.0, Hold, (550, 0), 52,
            "Short covering with flat OI. No directional conviction in futures.",
        ),
        contract(
            "f8", "BANKNIFTY", "Bank NIFTY Index", Call, 47500.0, 215.60,
            (52.30, 32.03), ("62.1L", "+9.4L", "28.9L"), 17.2, Buy, (15, 3), 83,
            "Aggressive CALL buying at 47500. Breakout momentum building.",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn ipo(
    id: &str,
    company: &str,
    symbol: &str,
    price_range: &str,
    issue_size: &str,
    lot_size: u32,
    dates: (&str, &str, &str),
    status: IpoStatus,
    gmp: i32,
    subscription: Option<&str>,
    rating: IpoRating,
    sector: &str,
    board: BoardType,
) -> IpoListing {
    IpoListing {
        id: id.into(),
        company: company.into(),
        symbol: symbol.into(),
        price_range: price_range.into(),
        issue_size: issue_size.into(),
        lot_size,
        open_date: dates.0.into(),
        close_date: dates.1.into(),
        listing_date: dates.2.into(),
        status,
        gmp,
        subscription: subscription.map(String::from),
        rating,
        sector: sector.into(),
        board,
    }
}

pub fn ipo_listings() -> Vec<IpoListing> {
    use BoardType::*;
    use IpoRating::*;
    use IpoStatus::*;

    vec![
        ipo(
            "ipo1", "Hexaware Technologies Ltd", "HEXAWARE", "₹674 - ₹708", "₹8,750 Cr", 21,
            ("12 Feb 2026", "14 Feb 2026", "19 Feb 2026"),
            Listed, 42, Some("26.5x"), Subscribe, "IT Services", Mainboard,
        ),
        ipo(
            "ipo2", "Ather Energy Pvt Ltd", "ATHER", "₹304 - ₹321", "₹3,100 Cr", 46,
            ("25 Feb 2026", "27 Feb 2026", "04 Mar 2026"),
            Open, 65, Some("8.2x"), Subscribe, "Electric Vehicles", Mainboard,
        ),
        ipo(
            "ipo3", "Zepto Quick Commerce", "ZEPTO", "₹450 - ₹480", "₹5,500 Cr", 31,
            ("05 Mar 2026", "07 Mar 2026", "12 Mar 2026"),
            Upcoming, 85, None, Subscribe, "E-Commerce", Mainboard,
        ),
        ipo(
            "ipo4", "PhysicsWallah Ltd", "PW", "₹280 - ₹295", "₹2,800 Cr", 50,
            ("10 Mar 2026", "12 Mar 2026", "17 Mar 2026"),
            Upcoming, 30, None, Neutral, "EdTech", Mainboard,
        ),
        ipo(
            "ipo5", "Swiggy Instamart Foods", "SWIGGYF", "₹120 - ₹135", "₹420 Cr", 110,
            ("20 Feb 2026", "22 Feb 2026", "27 Feb 2026"),
            Closed, -8, Some("1.4x"), Avoid, "Food & Beverages", Sme,
        ),
        ipo(
            "ipo6", "Lenskart Solutions Ltd", "LENSKART", "₹820 - ₹860", "₹4,200 Cr", 17,
            ("15 Mar 2026", "17 Mar 2026", "22 Mar 2026"),
            Upcoming, 110, None, Subscribe, "Retail / D2C", Mainboard,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_sizes() {
        assert_eq!(stock_alerts().len(), 12);
        assert_eq!(fno_contracts().len(), 8);
        assert_eq!(ipo_listings().len(), 6);
    }

    #[test]
    fn hold_alerts_carry_no_quantity_or_return() {
        for a in stock_alerts() {
            if a.signal == Signal::Hold {
                assert_eq!(a.quantity, 0, "{}", a.symbol);
                assert_eq!(a.expected_return, 0.0, "{}", a.symbol);
            } else {
                assert!(a.quantity > 0, "{}", a.symbol);
            }
        }
    }

    #[test]
    fn futures_have_no_strike_or_iv() {
        for c in fno_contracts() {
            if c.contract_type == ContractType::Future {
                assert_eq!(c.strike(), None);
                assert_eq!(c.implied_volatility(), None);
            } else {
                assert!(c.strike_price > 0.0);
            }
        }
    }

    #[test]
    fn confidences_are_percentages() {
        assert!(stock_alerts().iter().all(|a| a.confidence <= 100));
        assert!(fno_contracts().iter().all(|c| c.confidence <= 100));
    }
}
