use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

#[cfg(feature = "flate2")]
use flate2::read::GzDecoder;

use hifitime::Unit;

use log::{debug, warn};

use crate::{
    error::{Error, ParsingError},
    prelude::{Epoch, TimeScale, Vector3, SV},
};

fn file_descriptor(content: &str) -> bool {
    content.starts_with("%c")
}

fn sp3_comment(content: &str) -> bool {
    content.starts_with("/*")
}

fn end_of_file(content: &str) -> bool {
    content.eq("EOF")
}

fn new_epoch(content: &str) -> bool {
    content.starts_with("*  ")
}

fn position_entry(content: &str) -> bool {
    content.starts_with('P')
}

/// Parses [Epoch] from the epoch header fields:
/// year, month, day, hours, minutes and fractional seconds.
fn parse_epoch(content: &str, timescale: TimeScale) -> Result<Epoch, ParsingError> {
    let mut items = content.split_ascii_whitespace();

    let y = items.next().unwrap_or_default();
    let y = i32::from_str(y).or(Err(ParsingError::EpochYear(y.to_string())))?;

    let m = items.next().unwrap_or_default();
    let m = u8::from_str(m).or(Err(ParsingError::EpochMonth(m.to_string())))?;

    let d = items.next().unwrap_or_default();
    let d = u8::from_str(d).or(Err(ParsingError::EpochDay(d.to_string())))?;

    let hh = items.next().unwrap_or_default();
    let hh = u8::from_str(hh).or(Err(ParsingError::EpochHours(hh.to_string())))?;

    let mm = items.next().unwrap_or_default();
    let mm = u8::from_str(mm).or(Err(ParsingError::EpochMinutes(mm.to_string())))?;

    let ss = items.next().unwrap_or_default();
    let ss_fract = f64::from_str(ss).or(Err(ParsingError::EpochSeconds(ss.to_string())))?;

    if !(0.0..61.0).contains(&ss_fract) {
        return Err(ParsingError::EpochSeconds(ss.to_string()));
    }

    // rounding may carry into the next second (or minute)
    let nanos = (ss_fract * 1.0E9).round();

    let t = Epoch::maybe_from_gregorian(y, m, d, hh, mm, 0, 0, timescale)
        .or(Err(ParsingError::Epoch(content.trim().to_string())))?;

    Ok(t + nanos * Unit::Nanosecond)
}

/// Parses one position record: satellite identifier followed by
/// X, Y, Z in kilometers. Clock column is ignored.
fn parse_position(content: &str) -> Result<(SV, Vector3<f64>), ParsingError> {
    let sv = content.get(1..4).unwrap_or_default().trim();
    let sv = SV::from_str(sv).or(Err(ParsingError::SV(sv.to_string())))?;

    let mut coords = [0.0_f64; 3];
    let mut items = content.get(4..).unwrap_or_default().split_ascii_whitespace();

    for coord in coords.iter_mut() {
        let item = items.next().unwrap_or_default();
        *coord = f64::from_str(item).or(Err(ParsingError::Coordinate(item.to_string())))?;
    }

    Ok((sv, Vector3::new(coords[0], coords[1], coords[2])))
}

/// Single position record, tagged with the [Epoch] it was published under.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionRecord {
    /// [Epoch] of publication
    pub epoch: Epoch,
    /// Satellite
    pub sv: SV,
    /// ECEF position (kilometers)
    pub position_km: Vector3<f64>,
}

/// [DailyEphemeris] is the content of one daily SP3 file, for all satellites.
/// Epoch headers and position records are kept in file order, so alignment
/// can be verified when building per satellite series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyEphemeris {
    /// [TimeScale] the epochs are expressed in
    pub timescale: TimeScale,
    /// Epoch headers, in file order
    pub epochs: Vec<Epoch>,
    /// Position records, in file order
    pub records: Vec<PositionRecord>,
    /// Comments found in file
    pub comments: Vec<String>,
}

impl DailyEphemeris {
    /// Parse [DailyEphemeris] from local file. Files terminated by `.gz`
    /// are decompressed on the fly, which requires the `flate2` feature.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let fd = File::open(path)?;

        let gzip = path.extension().map(|ext| ext == "gz").unwrap_or(false);

        let s = if gzip {
            Self::from_gzip(fd)?
        } else {
            let mut reader = BufReader::new(fd);
            Self::from_reader(&mut reader)?
        };

        debug!(
            "{}: {} epochs, {} position records",
            path.display(),
            s.epochs.len(),
            s.records.len()
        );

        Ok(s)
    }

    #[cfg(feature = "flate2")]
    fn from_gzip(fd: File) -> Result<Self, Error> {
        let mut reader = BufReader::new(GzDecoder::new(fd));
        Self::from_reader(&mut reader)
    }

    #[cfg(not(feature = "flate2"))]
    fn from_gzip(_: File) -> Result<Self, Error> {
        Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "gzip compressed data requires the flate2 feature",
        )))
    }

    /// Parse [DailyEphemeris] from [Read]able I/O.
    pub fn from_reader<R: Read>(reader: &mut BufReader<R>) -> Result<Self, Error> {
        let mut pc_count = 0_u8;
        let mut timescale = TimeScale::GPST;

        let mut epochs = Vec::<Epoch>::new();
        let mut records = Vec::<PositionRecord>::new();
        let mut comments = Vec::<String>::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim_end();

            if sp3_comment(line) {
                let comment = line.get(2..).unwrap_or_default().trim();
                if !comment.is_empty() {
                    comments.push(comment.to_string());
                }
                continue;
            }

            if end_of_file(line.trim()) {
                break;
            }

            if file_descriptor(line) {
                if pc_count == 0 {
                    let content = line.get(9..12).unwrap_or_default().trim();
                    timescale = match TimeScale::from_str(content) {
                        Ok(ts) => ts,
                        Err(_) => {
                            warn!("unknown timescale \"{}\": assuming GPST", content);
                            TimeScale::GPST
                        },
                    };
                }
                pc_count += 1;
                continue;
            }

            if new_epoch(line) {
                epochs.push(parse_epoch(&line[1..], timescale)?);
                continue;
            }

            if position_entry(line) {
                if line.split_ascii_whitespace().count() < 4 {
                    // tolerates malformed position vectors
                    warn!("malformed position record \"{}\"", line);
                    continue;
                }

                let epoch = *epochs
                    .last()
                    .ok_or(ParsingError::OrphanPosition(line.to_string()))?;

                let (sv, position_km) = parse_position(line)?;

                // null vectors denote missing data
                if position_km == Vector3::zeros() {
                    warn!("{} ({}) - missing position", epoch, sv);
                    continue;
                }

                records.push(PositionRecord {
                    epoch,
                    sv,
                    position_km,
                });
            }
        }

        Ok(Self {
            timescale,
            epochs,
            records,
            comments,
        })
    }

    /// Returns position records of this satellite, in file order.
    pub fn sv_records(&self, sv: SV) -> impl Iterator<Item = &PositionRecord> + '_ {
        self.records.iter().filter(move |rec| rec.sv == sv)
    }

    /// Returns the list of satellites described in this file, in order of appearance.
    pub fn satellites(&self) -> Vec<SV> {
        let mut svs = Vec::<SV>::new();
        for rec in self.records.iter() {
            if !svs.contains(&rec.sv) {
                svs.push(rec.sv);
            }
        }
        svs
    }
}
