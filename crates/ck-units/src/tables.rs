//! Built-in unit definitions, one slice per quantity kind.
//!
//! Factors are "1 unit = factor base units". The base unit of every slice
//! comes first and has a factor of exactly 1.

use ck_core::Factor;

/// A unit of a linear quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDefinition {
    /// Canonical name, used as the table key (e.g. `"feet"`).
    pub name: &'static str,
    /// Human-readable label (e.g. `"Feet"`).
    pub label: &'static str,
    /// Short symbol (e.g. `"ft"`).
    pub symbol: &'static str,
    /// Value of one unit expressed in the table's base unit.
    pub factor: Factor,
    /// Additional accepted spellings, matched case-insensitively.
    pub aliases: &'static [&'static str],
}

const fn unit(
    name: &'static str,
    label: &'static str,
    symbol: &'static str,
    factor: Factor,
    aliases: &'static [&'static str],
) -> UnitDefinition {
    UnitDefinition {
        name,
        label,
        symbol,
        factor,
        aliases,
    }
}

/// Length (base: meter).
pub static LENGTH: &[UnitDefinition] = &[
    unit("meter", "Meters", "m", 1.0, &["m", "meters", "metre", "metres"]),
    unit("kilometer", "Kilometers", "km", 1000.0, &["km", "kilometers", "kilometre", "kilometres"]),
    unit("centimeter", "Centimeters", "cm", 0.01, &["cm", "centimeters", "centimetre", "centimetres"]),
    unit("millimeter", "Millimeters", "mm", 0.001, &["mm", "millimeters", "millimetre", "millimetres"]),
    unit("micrometer", "Micrometers", "µm", 1e-6, &["µm", "um", "micrometers", "micron", "microns"]),
    unit("mile", "Miles", "mi", 1609.344, &["mi", "miles"]),
    unit("yard", "Yards", "yd", 0.9144, &["yd", "yards"]),
    unit("feet", "Feet", "ft", 0.3048, &["ft", "foot"]),
    unit("inch", "Inches", "in", 0.0254, &["in", "inches"]),
    unit("nautical_mile", "Nautical Miles", "nmi", 1852.0, &["nmi", "nautical mile", "nautical miles"]),
];

/// Weight (base: kilogram).
pub static WEIGHT: &[UnitDefinition] = &[
    unit("kilogram", "Kilograms", "kg", 1.0, &["kg", "kilograms", "kilo", "kilos"]),
    unit("gram", "Grams", "g", 0.001, &["g", "grams"]),
    unit("milligram", "Milligrams", "mg", 1e-6, &["mg", "milligrams"]),
    unit("tonne", "Metric Tonnes", "t", 1000.0, &["t", "tonnes", "metric ton", "metric tons"]),
    unit("pound", "Pounds", "lb", 0.453_592_37, &["lb", "lbs", "pounds"]),
    unit("ounce", "Ounces", "oz", 0.028_349_523_125, &["oz", "ounces"]),
    unit("stone", "Stones", "st", 6.350_293_18, &["st", "stones"]),
];

/// Area (base: square meter).
pub static AREA: &[UnitDefinition] = &[
    unit("square_meter", "Square Meters", "m²", 1.0, &["m2", "m²", "sq m", "square meter", "square meters"]),
    unit("square_kilometer", "Square Kilometers", "km²", 1e6, &["km2", "km²", "sq km", "square kilometer", "square kilometers"]),
    unit("square_centimeter", "Square Centimeters", "cm²", 1e-4, &["cm2", "cm²", "sq cm", "square centimeter", "square centimeters"]),
    unit("hectare", "Hectares", "ha", 10_000.0, &["ha", "hectares"]),
    unit("acre", "Acres", "ac", 4_046.856_422_4, &["ac", "acres"]),
    unit("square_mile", "Square Miles", "mi²", 2_589_988.110_336, &["mi2", "mi²", "sq mi", "square mile", "square miles"]),
    unit("square_yard", "Square Yards", "yd²", 0.836_127_36, &["yd2", "yd²", "sq yd", "square yard", "square yards"]),
    unit("square_foot", "Square Feet", "ft²", 0.092_903_04, &["ft2", "ft²", "sq ft", "square foot", "square feet"]),
    unit("square_inch", "Square Inches", "in²", 0.000_645_16, &["in2", "in²", "sq in", "square inch", "square inches"]),
];

/// Volume (base: liter).
pub static VOLUME: &[UnitDefinition] = &[
    unit("liter", "Liters", "L", 1.0, &["l", "liters", "litre", "litres"]),
    unit("milliliter", "Milliliters", "mL", 0.001, &["ml", "milliliters", "millilitre", "millilitres"]),
    unit("cubic_meter", "Cubic Meters", "m³", 1000.0, &["m3", "m³", "cubic meter", "cubic meters"]),
    unit("gallon", "US Gallons", "gal", 3.785_411_784, &["gal", "gallons", "us gallon"]),
    unit("quart", "US Quarts", "qt", 0.946_352_946, &["qt", "quarts"]),
    unit("pint", "US Pints", "pt", 0.473_176_473, &["pt", "pints"]),
    unit("cup", "US Cups", "cup", 0.236_588_236_5, &["cups"]),
    unit("fluid_ounce", "US Fluid Ounces", "fl oz", 0.029_573_529_562_5, &["fl oz", "fl-oz", "floz", "fluid ounce", "fluid ounces"]),
    unit("tablespoon", "Tablespoons", "tbsp", 0.014_786_764_781_25, &["tbsp", "tablespoons"]),
    unit("teaspoon", "Teaspoons", "tsp", 0.004_928_921_593_75, &["tsp", "teaspoons"]),
    unit("imperial_gallon", "Imperial Gallons", "imp gal", 4.546_09, &["imp gal", "imperial gallons", "uk gallon"]),
];

/// Speed (base: meter per second).
pub static SPEED: &[UnitDefinition] = &[
    unit("meter_per_second", "Meters/Second", "m/s", 1.0, &["m/s", "mps", "meters per second"]),
    unit("kilometer_per_hour", "Kilometers/Hour", "km/h", 1.0 / 3.6, &["km/h", "kmh", "kph", "kilometers per hour"]),
    unit("mile_per_hour", "Miles/Hour", "mph", 0.44704, &["mph", "mi/h", "miles per hour"]),
    unit("knot", "Knots", "kn", 1852.0 / 3600.0, &["kn", "kt", "knots"]),
    unit("foot_per_second", "Feet/Second", "ft/s", 0.3048, &["ft/s", "fps", "feet per second"]),
];

/// Time (base: second).
pub static TIME: &[UnitDefinition] = &[
    unit("second", "Seconds", "s", 1.0, &["s", "sec", "secs", "seconds"]),
    unit("millisecond", "Milliseconds", "ms", 0.001, &["ms", "milliseconds"]),
    unit("minute", "Minutes", "min", 60.0, &["min", "mins", "minutes"]),
    unit("hour", "Hours", "h", 3600.0, &["h", "hr", "hrs", "hours"]),
    unit("day", "Days", "d", 86_400.0, &["d", "days"]),
    unit("week", "Weeks", "wk", 604_800.0, &["wk", "weeks"]),
    // 30.436875 days: one twelfth of a Gregorian year.
    unit("month", "Months", "mo", 2_629_746.0, &["mo", "months"]),
    // 365.2425 days.
    unit("year", "Years", "yr", 31_556_952.0, &["yr", "y", "years"]),
];
