/// Contract names as they appear in the Solidity checkout and in the
/// deployment record.
pub(crate) const BATCH_TRANSACTION: &str = "BatchTransaction";
pub(crate) const DEXSPAN_ADAPTER: &str = "DexSpanAdapter";
pub(crate) const NITRO_ADAPTER: &str = "NitroAdapter";
