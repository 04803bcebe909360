//! Contract bindings for the subset of `EthMultiVault` the suite uses.

alloy::sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface EthMultiVault {
        event AtomCreated(address indexed creator, address indexed atomWallet, bytes atomData, uint256 vaultID);
        event TripleCreated(address indexed creator, uint256 subjectId, uint256 predicateId, uint256 objectId, uint256 vaultID);

        error MultiVault_AtomExists(bytes atomUri);
        error MultiVault_TripleExists(uint256 subjectId, uint256 predicateId, uint256 objectId);

        function atomsByHash(bytes32 atomHash) external view returns (uint256);
        function triplesByHash(bytes32 tripleHash) external view returns (uint256);
        function tripleHashFromAtoms(uint256 subjectId, uint256 predicateId, uint256 objectId) external pure returns (bytes32);

        function getAtomCost() external view returns (uint256);
        function getTripleCost() external view returns (uint256);
        function generalConfig() external view returns (
            address admin,
            address protocolMultisig,
            uint256 feeDenominator,
            uint256 minDeposit,
            uint256 minShare,
            uint256 atomUriMaxLength,
            uint256 decimalPrecision,
            uint256 minDelay
        );
        function getVaultStateForUser(uint256 vaultId, address receiver) external view returns (uint256 shares, uint256 totalUserAssets);

        function createAtom(bytes atomUri) external payable returns (uint256);
        function createTriple(uint256 subjectId, uint256 predicateId, uint256 objectId) external payable returns (uint256);
        function depositAtom(address receiver, uint256 id) external payable returns (uint256);
        function depositTriple(address receiver, uint256 id) external payable returns (uint256);
    }
}
