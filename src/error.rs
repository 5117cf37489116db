use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    #[error("you cannot set both acceleration and undersampling factor")]
    BothFactorsSet,
    #[error("you need to set acceleration factor or undersampling factor")]
    NoFactorSet,
    #[error("acceleration factor must be at least 1 (got {0})")]
    InvalidAccelFactor(usize),
    #[error("undersampling factor must be finite and positive (got {0})")]
    InvalidUndersampling(f64),
    #[error("shape {shape:?} needs at least {expected} axes")]
    RankTooLow { shape: Vec<usize>, expected: usize },
    #[error("shape {shape:?} has an empty axis")]
    EmptyAxis { shape: Vec<usize> },
    #[error("mask has {mask_len} columns but the target shape has {num_cols}")]
    MaskLengthMismatch { mask_len: usize, num_cols: usize },
    #[error("mask of shape {mask:?} does not broadcast to k-space of shape {kspace:?}")]
    MaskShapeMismatch { mask: Vec<usize>, kspace: Vec<usize> },
    #[error("acceleration factor {accel_factor} leaves no high-frequency samples in {num_cols} columns")]
    NoHighFrequencies { accel_factor: usize, num_cols: usize },
    #[error("no spokes fit in a readout of width {width}")]
    NoSpokes { width: usize },
    #[error("spiral needs at least one revolution (got {0})")]
    InvalidRevolutions(usize),
    #[error("{spokes} spokes of {samples_per_spoke} samples do not fit in memory")]
    TooManySamples { spokes: f64, samples_per_spoke: usize },
    #[error("{what} produced {actual} samples but declares {expected}")]
    StaticShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("random mask did not retain exactly {target} columns in {draws} draws")]
    RetainedColumnsUnreachable { target: usize, draws: usize },
    #[error("unknown {kind} '{name}'")]
    UnknownKind { kind: &'static str, name: String },
}

pub type Result<T> = std::result::Result<T, SamplingError>;
