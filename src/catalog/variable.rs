//! The six reanalysis variables fetched for each year.

use std::{fmt, str::FromStr};

use anyhow::{anyhow, Error};

use super::DirectoryLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A daily-mean field in the archive. See the [PSL documentation](https://psl.noaa.gov/data/gridded/data.20thC_ReanV3.html)
/// for units and levels.
pub enum Variable {
    GeopotentialHeight,
    ZonalWind,
    OutgoingLongwave,
    SurfacePressure,
    AirTemperature2m,
    SkinTemperature,
}

impl Variable {
    /// Every variable, in the order they are fetched.
    pub const ALL: [Variable; 6] = [
        Variable::GeopotentialHeight,
        Variable::ZonalWind,
        Variable::OutgoingLongwave,
        Variable::SurfacePressure,
        Variable::AirTemperature2m,
        Variable::SkinTemperature,
    ];

    /// Name used for the local file.
    pub fn short_name(&self) -> &'static str {
        match self {
            Variable::GeopotentialHeight => "hgt",
            Variable::ZonalWind => "uwnd",
            Variable::OutgoingLongwave => "olr",
            Variable::SurfacePressure => "psfc",
            Variable::AirTemperature2m => "t2m",
            Variable::SkinTemperature => "skint",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Variable::GeopotentialHeight => "geopotential height",
            Variable::ZonalWind => "zonal wind",
            Variable::OutgoingLongwave => "upward longwave flux at top of atmosphere",
            Variable::SurfacePressure => "surface pressure",
            Variable::AirTemperature2m => "2 m air temperature",
            Variable::SkinTemperature => "skin temperature",
        }
    }

    // Directory prefix; the archive appends the directory label.
    fn remote_dir(&self) -> &'static str {
        match self {
            Variable::GeopotentialHeight | Variable::ZonalWind => "prs",
            Variable::OutgoingLongwave => "ntatFlx",
            Variable::SurfacePressure | Variable::SkinTemperature => "sfc",
            Variable::AirTemperature2m => "2m",
        }
    }

    fn remote_stem(&self) -> &'static str {
        match self {
            Variable::GeopotentialHeight => "hgt",
            Variable::ZonalWind => "uwnd",
            Variable::OutgoingLongwave => "ulwrf.ntat",
            Variable::SurfacePressure => "pres.sfc",
            Variable::AirTemperature2m => "air.2m",
            Variable::SkinTemperature => "skt",
        }
    }

    /// Path of the yearly file relative to the `Dailies` root.
    pub fn remote_path(&self, label: DirectoryLabel, year: u16) -> String {
        format!(
            "{}{}/{}.{}.nc",
            self.remote_dir(),
            label.token(),
            self.remote_stem(),
            year
        )
    }

    pub fn file_name(&self, year: u16) -> String {
        format!("{}.{}.nc", self.short_name(), year)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Variable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Variable::ALL
            .into_iter()
            .find(|v| v.short_name() == name)
            .ok_or_else(|| {
                let known: Vec<&str> = Variable::ALL.iter().map(|v| v.short_name()).collect();
                anyhow!("unknown variable `{}`, expected one of {}", s, known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn should_build_remote_paths() {
        let label = DirectoryLabel::Early;
        assert_eq!(Variable::GeopotentialHeight.remote_path(label, 1900), "prsSI/hgt.1900.nc");
        assert_eq!(Variable::ZonalWind.remote_path(label, 1900), "prsSI/uwnd.1900.nc");
        assert_eq!(
            Variable::OutgoingLongwave.remote_path(label, 1900),
            "ntatFlxSI/ulwrf.ntat.1900.nc"
        );
        assert_eq!(Variable::SurfacePressure.remote_path(label, 1900), "sfcSI/pres.sfc.1900.nc");
        assert_eq!(Variable::AirTemperature2m.remote_path(label, 1900), "2mSI/air.2m.1900.nc");
        assert_eq!(Variable::SkinTemperature.remote_path(label, 1900), "sfcSI/skt.1900.nc");
    }

    #[test]
    fn should_build_local_file_names() {
        let names: Vec<String> = Variable::ALL.iter().map(|v| v.file_name(1836)).collect();
        assert_eq!(
            names,
            vec![
                "hgt.1836.nc",
                "uwnd.1836.nc",
                "olr.1836.nc",
                "psfc.1836.nc",
                "t2m.1836.nc",
                "skint.1836.nc"
            ]
        );
    }

    #[test]
    fn should_parse_short_names() {
        assert_eq!("olr".parse::<Variable>().unwrap(), Variable::OutgoingLongwave);
        assert_eq!(" T2M ".parse::<Variable>().unwrap(), Variable::AirTemperature2m);
    }

    #[test]
    fn should_reject_unknown_variable() {
        let err = "vwnd".parse::<Variable>().unwrap_err();
        assert!(err.to_string().contains("vwnd"));
    }
}
