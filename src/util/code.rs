use crate::core::constants::{LEADER_KEY, MAX_CODE_LEN};
use crate::core::dimensions::{HexDims, clamp_level};
use crate::core::grid::{adjust_coordinate, grid_to_location};
use crate::util::coord::{Coordinate, Location};
use crate::util::error::GeoHexError;

/// Lattice axes and center used when encoding an address.
///
/// Fractional addresses are rounded to the nearest lattice point. A cell on
/// the antimeridian is always encoded with `x <= y` and reports its center
/// longitude as exactly -180.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EncodingFrame {
    pub x: i64,
    pub y: i64,
    pub center: Location,
}

pub(crate) fn encoding_frame(grid: &Coordinate, level: u8) -> EncodingFrame {
    let dims = HexDims::for_level(level);
    let (mut x, mut y) = (grid.x.round(), grid.y.round());
    let mut center = grid_to_location(&Coordinate::new(x, y), level);

    if (x - y).abs() == dims.max_steps {
        if x > y {
            std::mem::swap(&mut x, &mut y);
        }
        center.lng = -180.0;
    }

    EncodingFrame {
        x: x as i64,
        y: y as i64,
        center,
    }
}

/// Encodes a lattice address at `level` into its textual code.
///
/// The code is `level + 2` characters: a two character leader followed by
/// one base-9 digit per level.
pub fn encode_code(grid: &Coordinate, level: u8) -> String {
    let level = clamp_level(level);
    encode_frame(&encoding_frame(grid, level), level)
}

pub(crate) fn encode_frame(frame: &EncodingFrame, level: u8) -> String {
    let eastern = frame.center.lng == -180.0 || frame.center.lng >= 0.0;
    let n_digits = level as usize + 3;
    let mut code3_x = Vec::with_capacity(n_digits);
    let mut code3_y = Vec::with_capacity(n_digits);
    let (mut rem_x, mut rem_y) = (frame.x, frame.y);

    for i in 0..n_digits {
        let pow = 3i64.pow((n_digits - 1 - i) as u32);
        code3_x.push(ternary_digit(&mut rem_x, pow));
        code3_y.push(ternary_digit(&mut rem_y, pow));

        // Eastern-hemisphere cells sharing a leader with their western twin
        // are folded onto a distinct leader.
        if i == 2 && eastern && code3_x[1] == code3_y[1] && code3_x[2] == code3_y[2] {
            match (code3_x[0], code3_y[0]) {
                (2, 1) => {
                    code3_x[0] = 1;
                    code3_y[0] = 2;
                }
                (1, 0) => {
                    code3_x[0] = 0;
                    code3_y[0] = 1;
                }
                _ => {}
            }
        }
    }

    let code9: Vec<u8> = code3_x
        .iter()
        .zip(&code3_y)
        .map(|(dx, dy)| dx * 3 + dy)
        .collect();

    let leader = code9[0] as usize * 100 + code9[1] as usize * 10 + code9[2] as usize;
    let mut code = String::with_capacity(level as usize + 2);
    code.push(LEADER_KEY[leader / 30] as char);
    code.push(LEADER_KEY[leader % 30] as char);
    code.extend(code9[3..].iter().map(|d| (b'0' + d) as char));
    code
}

fn ternary_digit(rem: &mut i64, pow: i64) -> u8 {
    let half = (pow + 1) / 2;
    if *rem >= half {
        *rem -= pow;
        2
    } else if *rem <= -half {
        *rem += pow;
        0
    } else {
        1
    }
}

/// Level implied by a code's length.
pub fn calc_level_by_code(code: &str) -> usize {
    code.len().saturating_sub(2)
}

/// Decodes a code into its (adjusted) lattice address and level.
pub fn decode_code(code: &str) -> Result<(Coordinate, u8), GeoHexError> {
    let bytes = code.as_bytes();
    if bytes.len() < 2 || bytes.len() > MAX_CODE_LEN {
        let reason = format!("length {} outside 2..={}", bytes.len(), MAX_CODE_LEN);
        return Err(invalid(code, reason));
    }
    let level = (bytes.len() - 2) as u8;

    let leader = leader_value(bytes[0], bytes[1]).ok_or_else(|| {
        let leader: String = code.chars().take(2).collect();
        invalid(code, format!("unknown leader {:?}", leader))
    })?;

    // Leader digits are zero-padded to three before the trailing digits.
    let mut dec9 = vec![
        (leader / 100) as u8,
        (leader / 10 % 10) as u8,
        (leader % 10) as u8,
    ];
    for &b in &bytes[2..] {
        if !(b'0'..=b'8').contains(&b) {
            let reason = format!("digit {:?} outside 0..=8", b as char);
            return Err(invalid(code, reason));
        }
        dec9.push(b - b'0');
    }

    unfold_leader(&mut dec9);

    let n_digits = dec9.len();
    let (mut x, mut y) = (0i64, 0i64);
    for (i, d) in dec9.iter().enumerate() {
        let pow = 3i64.pow((n_digits - 1 - i) as u32);
        x += (*d as i64 / 3 - 1) * pow;
        y += (*d as i64 % 3 - 1) * pow;
    }

    let grid = adjust_coordinate(&Coordinate::new(x as f64, y as f64), level);
    Ok((grid, level))
}

/// Inverse of the eastern-hemisphere fold on the three leader digits.
fn unfold_leader(dec9: &mut [u8]) {
    let keeps = |d: u8| !matches!(d, 1 | 2 | 5);
    if keeps(dec9[1]) && keeps(dec9[2]) {
        match dec9[0] {
            1 => dec9[0] = 3,
            5 => dec9[0] = 7,
            _ => {}
        }
    }
}

/// Number encoded by a leader, if the pair is one the encoder can produce.
fn leader_value(first: u8, second: u8) -> Option<u16> {
    let hi = LEADER_KEY.iter().position(|&c| c == first)? as u16;
    let lo = LEADER_KEY.iter().position(|&c| c == second)? as u16;
    let n = hi * 30 + lo;
    let in_table = n <= 888 && n % 10 != 9 && (n / 10) % 10 != 9;
    in_table.then_some(n)
}

fn invalid(code: &str, reason: String) -> GeoHexError {
    log::debug!("rejecting code {:?}: {}", code, reason);
    GeoHexError::InvalidCode(reason)
}
