//! Built-in demo universe, shown when no dataset file is available (and always on WASM).

pub struct DemoCompany {
    pub ticker: &'static str,
    pub name: &'static str,
    pub industry: &'static str,
    /// Consecutive years of dividend raises
    pub raise_years: f64,
    /// Current dividend yield (%)
    pub div_yield: f64,
    pub eps: f64,
}

const fn company(
    ticker: &'static str,
    name: &'static str,
    industry: &'static str,
    raise_years: f64,
    div_yield: f64,
    eps: f64,
) -> DemoCompany {
    DemoCompany {
        ticker,
        name,
        industry,
        raise_years,
        div_yield,
        eps,
    }
}

pub struct DemoConfig {
    pub companies: &'static [DemoCompany],
    /// Synthetic yield samples per company used for the 5-year distribution
    pub history_len: usize,
    pub history_interval_years: f64,
}

pub const DEMO: DemoConfig = DemoConfig {
    history_len: 60,
    history_interval_years: 5.0,
    companies: &[
        company("ABBV", "AbbVie", "Pharmaceuticals", 11.0, 3.9, 5.6),
        company("ABM", "ABM Industries", "Facilities Services", 56.0, 1.9, 2.3),
        company("ADM", "Archer-Daniels-Midland", "Agricultural Products", 49.0, 3.4, 4.8),
        company("ADP", "Automatic Data Processing", "IT Services", 49.0, 2.1, 9.1),
        company("AFL", "Aflac", "Insurance", 41.0, 2.0, 7.8),
        company("ALB", "Albemarle", "Specialty Chemicals", 29.0, 1.3, 8.2),
        company("APD", "Air Products", "Industrial Gases", 41.0, 2.5, 10.3),
        company("ARTNA", "Artesian Resources", "Water Utilities", 27.0, 3.0, 1.9),
        company("BDX", "Becton Dickinson", "Medical Equipment", 52.0, 1.6, 5.9),
        company("BEN", "Franklin Resources", "Asset Management", 44.0, 4.8, 1.8),
        company("CAH", "Cardinal Health", "Healthcare Distributors", 38.0, 2.0, 5.8),
        company("CAT", "Caterpillar", "Machinery", 30.0, 1.9, 20.1),
        company("CB", "Chubb", "Insurance", 31.0, 1.4, 21.0),
        company("CL", "Colgate-Palmolive", "Household Products", 61.0, 2.2, 3.3),
        company("CLX", "Clorox", "Household Products", 47.0, 3.1, 3.3),
        company("CVX", "Chevron", "Integrated Oil & Gas", 37.0, 4.1, 12.4),
        company("DOV", "Dover", "Machinery", 68.0, 1.3, 7.5),
        company("ED", "Consolidated Edison", "Multi-Utilities", 50.0, 3.4, 5.3),
        company("EMR", "Emerson Electric", "Electrical Equipment", 67.0, 2.0, 4.1),
        company("ESS", "Essex Property Trust", "Residential REITs", 30.0, 3.5, 6.1),
        company("EXPD", "Expeditors International", "Logistics", 30.0, 1.2, 5.0),
        company("FRT", "Federal Realty", "Retail REITs", 56.0, 4.1, 3.2),
        company("GD", "General Dynamics", "Aerospace & Defense", 33.0, 2.0, 12.0),
        company("GPC", "Genuine Parts", "Distributors", 68.0, 2.8, 6.5),
        company("HRL", "Hormel Foods", "Packaged Foods", 58.0, 3.3, 1.5),
        company("IBM", "IBM", "IT Services", 29.0, 3.7, 6.4),
        company("INTC", "Intel", "Semiconductors", 9.0, 1.5, 0.4),
        company("ITW", "Illinois Tool Works", "Machinery", 50.0, 2.2, 9.7),
        company("JNJ", "Johnson & Johnson", "Pharmaceuticals", 62.0, 3.1, 6.8),
        company("KMB", "Kimberly-Clark", "Household Products", 52.0, 3.6, 5.2),
        company("KO", "Coca-Cola", "Beverages", 62.0, 3.0, 2.5),
        company("LEG", "Leggett & Platt", "Home Furnishings", 52.0, 6.9, 1.1),
        company("LOW", "Lowe's", "Home Improvement Retail", 51.0, 1.8, 13.1),
        company("MCD", "McDonald's", "Restaurants", 48.0, 2.3, 11.4),
        company("MDT", "Medtronic", "Medical Equipment", 47.0, 3.3, 2.8),
        company("MKC", "McCormick", "Packaged Foods", 38.0, 2.2, 2.5),
        company("MMM", "3M", "Industrial Conglomerates", 66.0, 5.9, 4.0),
        company("MSFT", "Microsoft", "Software", 22.0, 0.8, 11.0),
        company("NEE", "NextEra Energy", "Electric Utilities", 29.0, 2.9, 3.6),
        company("NUE", "Nucor", "Steel", 51.0, 1.3, 18.0),
        company("O", "Realty Income", "Retail REITs", 30.0, 5.6, 1.3),
        company("OKE", "ONEOK", "Oil & Gas Midstream", 2.0, 5.7, 4.8),
        company("PEP", "PepsiCo", "Beverages", 52.0, 3.0, 6.6),
        company("PG", "Procter & Gamble", "Household Products", 68.0, 2.4, 6.0),
        company("PNR", "Pentair", "Industrial Machinery", 48.0, 1.1, 3.7),
        company("ROP", "Roper Technologies", "Software", 31.0, 0.6, 13.0),
        company("SBUX", "Starbucks", "Restaurants", 13.0, 2.3, 3.6),
        company("SHW", "Sherwin-Williams", "Specialty Chemicals", 46.0, 0.9, 9.3),
        company("SJW", "SJW Group", "Water Utilities", 56.0, 2.7, 2.6),
        company("SWK", "Stanley Black & Decker", "Machinery", 56.0, 3.7, 0.9),
        company("SYY", "Sysco", "Food Distributors", 54.0, 2.7, 3.9),
        company("T", "AT&T", "Telecom Services", 0.0, 6.1, 1.9),
        company("TGT", "Target", "General Merchandise", 53.0, 3.1, 8.9),
        company("TROW", "T. Rowe Price", "Asset Management", 38.0, 4.5, 7.8),
        company("TXN", "Texas Instruments", "Semiconductors", 20.0, 3.0, 7.1),
        company("UNP", "Union Pacific", "Railroads", 17.0, 2.2, 11.0),
        company("V", "Visa", "Payment Services", 15.0, 0.8, 8.3),
        company("VZ", "Verizon", "Telecom Services", 19.0, 6.6, 2.8),
        company("WMT", "Walmart", "Hypermarkets", 51.0, 1.4, 2.0),
        company("XOM", "Exxon Mobil", "Integrated Oil & Gas", 41.0, 3.3, 8.9),
    ],
};
