use ethers::contract::abigen;

abigen!(
    BatchTransactionAbi,
    r"[
        function owner() view returns (address)
        function transferOwnership(address newOwner)
        function setAdapters(address[] adapters, bool[] statuses)
    ]"
);
