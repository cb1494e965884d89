#![cfg_attr(not(feature = "std"), no_std)]
// Allow deprecated weight constants for MVP (will be replaced by benchmarks post-grant)
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, traits::EnsureOrigin};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;

pub mod migrations;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// Upper bound on supersession-chain hops walked by `current_address_for`.
/// The chain is append-only and acyclic by construction; hitting this bound
/// means storage is corrupted, not that the caller did anything wrong.
const MAX_SUPERSESSION_HOPS: u32 = 32;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Register name (e.g., "Sovereign Equity Register"). Immutable once set.
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Register symbol (e.g., "SEQ"). Immutable once set.
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Whether the register has been created (name/symbol bound).
    #[pallet::storage]
    #[pallet::getter(fn is_created)]
    pub type Created<T> = StorageValue<_, bool, ValueQuery>;

    /// Total units issued minus total units burned.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances in indivisible units.
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Spending allowances: (owner, spender) -> remaining units.
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Identity fingerprints. An account is verified iff an entry is present;
    /// the fingerprint itself is an opaque hash of the off-chain KYC record.
    #[pallet::storage]
    #[pallet::getter(fn fingerprint_of)]
    pub type Fingerprints<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, T::Hash, OptionQuery>;

    /// Shareholder arena: slot -> holder, slots are exactly 0..HolderCount.
    /// Removal swaps the last slot into the freed one, so iteration order is
    /// not stable across removals.
    #[pallet::storage]
    pub type Holders<T: Config> = StorageMap<_, Blake2_128Concat, u32, T::AccountId, OptionQuery>;

    /// Reverse shareholder index: holder -> arena slot. An entry is present
    /// iff the account's balance is strictly positive.
    #[pallet::storage]
    pub type HolderIndices<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, u32, OptionQuery>;

    /// Number of occupied arena slots.
    #[pallet::storage]
    #[pallet::getter(fn holder_count)]
    pub type HolderCount<T> = StorageValue<_, u32, ValueQuery>;

    /// Cancellation chain: retired account -> replacement. Append-only; a
    /// replacement may itself be retired later, forming a multi-hop chain.
    #[pallet::storage]
    #[pallet::getter(fn superseded_by)]
    pub type SupersededBy<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, T::AccountId, OptionQuery>;

    /// Locked accounts (cannot send or receive). Orthogonal to verification.
    #[pallet::storage]
    #[pallet::getter(fn is_locked)]
    pub type Locked<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Global transfer freeze. Reversible while the register is open.
    #[pallet::storage]
    #[pallet::getter(fn is_frozen)]
    pub type Frozen<T> = StorageValue<_, bool, ValueQuery>;

    /// Terminal closed flag. Monotonic: once true, every mutating operation
    /// is rejected forever and only read queries remain.
    #[pallet::storage]
    #[pallet::getter(fn is_closed)]
    pub type Closed<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Register created with its immutable name/symbol pair
        Created { name: Vec<u8>, symbol: Vec<u8> },
        /// Account verified and bound to an identity fingerprint
        VerifiedAdded { account: T::AccountId, fingerprint: T::Hash },
        /// Account's verification removed
        VerifiedRemoved { account: T::AccountId },
        /// Account's identity fingerprint replaced
        VerifiedUpdated { account: T::AccountId, old_fingerprint: T::Hash, new_fingerprint: T::Hash },
        /// New units issued to a verified account
        Issued { to: T::AccountId, amount: u128 },
        /// Units transferred between accounts
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Allowance set for a spender
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Units burned from an account
        Burned { from: T::AccountId, amount: u128 },
        /// Account retired and its holding spliced onto a replacement
        Superseded { original: T::AccountId, replacement: T::AccountId, amount: u128 },
        /// Global freeze flag flipped
        FreezeToggled { frozen: bool },
        /// Per-account lock flipped
        LockToggled { account: T::AccountId, locked: bool },
        /// Register closed for migration; all mutation permanently disabled
        ClosedForMigration,
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The register's name/symbol pair is already bound
        AlreadyCreated,
        /// Register name exceeds 64 bytes
        NameTooLong,
        /// Register symbol exceeds 16 bytes
        SymbolTooLong,
        /// The zero hash is not a valid identity fingerprint
        InvalidFingerprint,
        /// Account is already verified
        AlreadyVerified,
        /// Account is not verified
        NotVerified,
        /// Account was retired via cancel-and-reissue and cannot be re-verified
        AccountSuperseded,
        /// Verification cannot be removed while the account holds units
        HolderHasBalance,
        InsufficientBalance,
        InsufficientAllowance,
        /// Sender or receiver is locked
        AccountLocked,
        /// Transfers are globally frozen
        LedgerFrozen,
        /// The register is closed; only read queries remain
        LedgerClosed,
        /// The account holds no units
        NotAHolder,
        /// The replacement already holds units
        AlreadyAHolder,
        /// No holder occupies the requested slot
        IndexOutOfRange,
        /// Supersession chain exceeded the hop bound; storage is corrupted
        SupersessionChainCorrupted,
        Overflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Bind the register's immutable name/symbol pair. One-time.
        #[pallet::call_index(0)]
        #[pallet::weight(10_000)]
        pub fn create(origin: OriginFor<T>, name: Vec<u8>, symbol: Vec<u8>) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Self::do_create(name, symbol)
        }

        /// Verify an account by binding an identity fingerprint to it.
        #[pallet::call_index(1)]
        #[pallet::weight(10_000)]
        pub fn add_verified(
            origin: OriginFor<T>,
            account: T::AccountId,
            fingerprint: T::Hash,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Self::do_add_verified(account, fingerprint)
        }

        /// Remove an account's verification. The account must hold no units;
        /// removing an unverified account is a silent no-op.
        #[pallet::call_index(2)]
        #[pallet::weight(10_000)]
        pub fn remove_verified(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Self::do_remove_verified(account)
        }

        /// Replace a verified account's fingerprint. Supplying the stored
        /// fingerprint again is a silent no-op.
        #[pallet::call_index(3)]
        #[pallet::weight(10_000)]
        pub fn update_verified(
            origin: OriginFor<T>,
            account: T::AccountId,
            fingerprint: T::Hash,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Self::do_update_verified(account, fingerprint)
        }

        /// Issue new units to a verified account.
        #[pallet::call_index(4)]
        #[pallet::weight(10_000)]
        pub fn issue(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Self::do_issue(to, amount)
        }

        /// Transfer units to a verified account.
        #[pallet::call_index(5)]
        #[pallet::weight(10_000)]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(sender, to, amount)
        }

        /// Set a spender's allowance. Overwrites any previous value.
        #[pallet::call_index(6)]
        #[pallet::weight(10_000)]
        pub fn approve(
            origin: OriginFor<T>,
            spender: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            ensure!(!Closed::<T>::get(), Error::<T>::LedgerClosed);
            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        /// Raise a spender's allowance by `added`.
        #[pallet::call_index(7)]
        #[pallet::weight(10_000)]
        pub fn increase_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            added: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            ensure!(!Closed::<T>::get(), Error::<T>::LedgerClosed);
            let amount = Allowances::<T>::get(&owner, &spender)
                .checked_add(added)
                .ok_or(Error::<T>::Overflow)?;
            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        /// Lower a spender's allowance by `subtracted`.
        #[pallet::call_index(8)]
        #[pallet::weight(10_000)]
        pub fn decrease_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            subtracted: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            ensure!(!Closed::<T>::get(), Error::<T>::LedgerClosed);
            let current = Allowances::<T>::get(&owner, &spender);
            ensure!(current >= subtracted, Error::<T>::InsufficientAllowance);
            let amount = current - subtracted;
            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        /// Transfer units on behalf of `from`, consuming allowance.
        #[pallet::call_index(9)]
        #[pallet::weight(10_000)]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            let allowance = Allowances::<T>::get(&from, &spender);
            ensure!(allowance >= amount, Error::<T>::InsufficientAllowance);
            Self::do_transfer(from.clone(), to, amount)?;
            Allowances::<T>::insert(&from, &spender, allowance - amount);
            Ok(())
        }

        /// Burn units from any account. Administrative override: neither
        /// verification nor locks are checked.
        #[pallet::call_index(10)]
        #[pallet::weight(10_000)]
        pub fn burn(origin: OriginFor<T>, from: T::AccountId, amount: u128) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Self::do_burn(from, amount)
        }

        /// Retire `original` and splice its entire holding, arena slot and
        /// chain-of-custody record onto `replacement`. Administrative remedy
        /// for lost-key scenarios; ignores locks and the freeze flag.
        #[pallet::call_index(11)]
        #[pallet::weight(10_000)]
        pub fn cancel_and_reissue(
            origin: OriginFor<T>,
            original: T::AccountId,
            replacement: T::AccountId,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Self::do_cancel_and_reissue(original, replacement)
        }

        /// Flip the global freeze flag.
        #[pallet::call_index(12)]
        #[pallet::weight(10_000)]
        pub fn toggle_freeze(origin: OriginFor<T>) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Self::do_toggle_freeze()
        }

        /// Flip an account's lock flag.
        #[pallet::call_index(13)]
        #[pallet::weight(10_000)]
        pub fn toggle_lock(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Self::do_toggle_lock(account)
        }

        /// Close the register for migration. Terminal: freezes transfers and
        /// permanently disables every mutating operation.
        #[pallet::call_index(14)]
        #[pallet::weight(10_000)]
        pub fn close(origin: OriginFor<T>) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Self::do_close()
        }
    }

    /// Internal operations. The controller pallet drives the register through
    /// these after enforcing its own owner check; they are also the bodies of
    /// the admin dispatchables above. Each performs every precondition check
    /// before its first storage write.
    impl<T: Config> Pallet<T> {
        pub fn do_create(name: Vec<u8>, symbol: Vec<u8>) -> DispatchResult {
            ensure!(!Closed::<T>::get(), Error::<T>::LedgerClosed);
            ensure!(!Created::<T>::get(), Error::<T>::AlreadyCreated);
            let name: BoundedVec<u8, ConstU32<64>> =
                name.try_into().map_err(|_| Error::<T>::NameTooLong)?;
            let symbol: BoundedVec<u8, ConstU32<16>> =
                symbol.try_into().map_err(|_| Error::<T>::SymbolTooLong)?;
            TokenName::<T>::put(&name);
            TokenSymbol::<T>::put(&symbol);
            Created::<T>::put(true);
            Self::deposit_event(Event::Created {
                name: name.into_inner(),
                symbol: symbol.into_inner(),
            });
            Ok(())
        }

        pub fn do_add_verified(account: T::AccountId, fingerprint: T::Hash) -> DispatchResult {
            ensure!(!Closed::<T>::get(), Error::<T>::LedgerClosed);
            ensure!(fingerprint != T::Hash::default(), Error::<T>::InvalidFingerprint);
            ensure!(!SupersededBy::<T>::contains_key(&account), Error::<T>::AccountSuperseded);
            ensure!(!Fingerprints::<T>::contains_key(&account), Error::<T>::AlreadyVerified);
            Fingerprints::<T>::insert(&account, fingerprint);
            Self::deposit_event(Event::VerifiedAdded { account, fingerprint });
            Ok(())
        }

        pub fn do_remove_verified(account: T::AccountId) -> DispatchResult {
            ensure!(!Closed::<T>::get(), Error::<T>::LedgerClosed);
            ensure!(Balances::<T>::get(&account) == 0, Error::<T>::HolderHasBalance);
            if Fingerprints::<T>::take(&account).is_some() {
                Self::deposit_event(Event::VerifiedRemoved { account });
            }
            Ok(())
        }

        pub fn do_update_verified(account: T::AccountId, fingerprint: T::Hash) -> DispatchResult {
            ensure!(!Closed::<T>::get(), Error::<T>::LedgerClosed);
            ensure!(fingerprint != T::Hash::default(), Error::<T>::InvalidFingerprint);
            let old_fingerprint =
                Fingerprints::<T>::get(&account).ok_or(Error::<T>::NotVerified)?;
            if old_fingerprint != fingerprint {
                Fingerprints::<T>::insert(&account, fingerprint);
                Self::deposit_event(Event::VerifiedUpdated {
                    account,
                    old_fingerprint,
                    new_fingerprint: fingerprint,
                });
            }
            Ok(())
        }

        pub fn do_issue(to: T::AccountId, amount: u128) -> DispatchResult {
            ensure!(!Closed::<T>::get(), Error::<T>::LedgerClosed);
            ensure!(Self::is_verified(&to), Error::<T>::NotVerified);
            let new_supply =
                TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
            let new_balance =
                Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
            if amount > 0 {
                Self::index_holder(&to);
            }
            TotalSupply::<T>::put(new_supply);
            Balances::<T>::insert(&to, new_balance);
            Self::deposit_event(Event::Issued { to, amount });
            Ok(())
        }

        pub fn do_transfer(from: T::AccountId, to: T::AccountId, amount: u128) -> DispatchResult {
            ensure!(!Frozen::<T>::get(), Error::<T>::LedgerFrozen);
            ensure!(!Locked::<T>::get(&from), Error::<T>::AccountLocked);
            ensure!(!Locked::<T>::get(&to), Error::<T>::AccountLocked);
            ensure!(Self::is_verified(&to), Error::<T>::NotVerified);
            let from_balance = Balances::<T>::get(&from);
            ensure!(from_balance >= amount, Error::<T>::InsufficientBalance);
            if from != to {
                let new_to_balance =
                    Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
                // Receiver must be indexed before the balance writes settle.
                if amount > 0 {
                    Self::index_holder(&to);
                }
                Balances::<T>::insert(&from, from_balance - amount);
                Balances::<T>::insert(&to, new_to_balance);
                // Prune against the post-transfer balance, never a stale read.
                if Balances::<T>::get(&from) == 0 {
                    Self::drop_holder(&from);
                }
            }
            Self::deposit_event(Event::Transferred { from, to, amount });
            Ok(())
        }

        pub fn do_burn(from: T::AccountId, amount: u128) -> DispatchResult {
            ensure!(!Closed::<T>::get(), Error::<T>::LedgerClosed);
            let balance = Balances::<T>::get(&from);
            ensure!(balance >= amount, Error::<T>::InsufficientBalance);
            Balances::<T>::insert(&from, balance - amount);
            TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_sub(amount));
            if Balances::<T>::get(&from) == 0 {
                Self::drop_holder(&from);
            }
            Self::deposit_event(Event::Burned { from, amount });
            Ok(())
        }

        pub fn do_cancel_and_reissue(
            original: T::AccountId,
            replacement: T::AccountId,
        ) -> DispatchResult {
            ensure!(!Closed::<T>::get(), Error::<T>::LedgerClosed);
            let slot = HolderIndices::<T>::get(&original).ok_or(Error::<T>::NotAHolder)?;
            ensure!(Self::is_verified(&replacement), Error::<T>::NotVerified);
            ensure!(!Self::is_holder(&replacement), Error::<T>::AlreadyAHolder);
            Fingerprints::<T>::remove(&original);
            SupersededBy::<T>::insert(&original, &replacement);
            // Splice the replacement into the original's arena slot instead of
            // a remove/re-add round-trip.
            Holders::<T>::insert(slot, &replacement);
            HolderIndices::<T>::remove(&original);
            HolderIndices::<T>::insert(&replacement, slot);
            let amount = Balances::<T>::take(&original);
            Balances::<T>::insert(&replacement, amount);
            Self::deposit_event(Event::Superseded { original, replacement, amount });
            Ok(())
        }

        pub fn do_toggle_freeze() -> DispatchResult {
            ensure!(!Closed::<T>::get(), Error::<T>::LedgerClosed);
            let frozen = !Frozen::<T>::get();
            Frozen::<T>::put(frozen);
            Self::deposit_event(Event::FreezeToggled { frozen });
            Ok(())
        }

        pub fn do_toggle_lock(account: T::AccountId) -> DispatchResult {
            ensure!(!Closed::<T>::get(), Error::<T>::LedgerClosed);
            let locked = !Locked::<T>::get(&account);
            if locked {
                Locked::<T>::insert(&account, true);
            } else {
                Locked::<T>::remove(&account);
            }
            Self::deposit_event(Event::LockToggled { account, locked });
            Ok(())
        }

        pub fn do_close() -> DispatchResult {
            ensure!(!Closed::<T>::get(), Error::<T>::LedgerClosed);
            Frozen::<T>::put(true);
            Closed::<T>::put(true);
            Self::deposit_event(Event::ClosedForMigration);
            Ok(())
        }
    }

    /// Read-only queries. Total functions unless noted; degenerate inputs
    /// (unknown accounts, the zero hash) answer `false` rather than erroring.
    impl<T: Config> Pallet<T> {
        pub fn is_verified(account: &T::AccountId) -> bool {
            Fingerprints::<T>::contains_key(account)
        }

        pub fn is_holder(account: &T::AccountId) -> bool {
            HolderIndices::<T>::contains_key(account)
        }

        /// Whether `account` is verified with exactly `fingerprint`.
        pub fn has_fingerprint(account: &T::AccountId, fingerprint: T::Hash) -> bool {
            Fingerprints::<T>::get(account).is_some_and(|stored| stored == fingerprint)
        }

        /// Holder occupying arena slot `index`.
        pub fn holder_at(index: u32) -> Result<T::AccountId, Error<T>> {
            Holders::<T>::get(index).ok_or(Error::<T>::IndexOutOfRange)
        }

        pub fn is_superseded(account: &T::AccountId) -> bool {
            SupersededBy::<T>::contains_key(account)
        }

        /// Walk the supersession chain to its end. The chain is acyclic by
        /// construction, so the walk terminates; the hop bound only guards
        /// against corrupted storage.
        pub fn current_address_for(account: &T::AccountId) -> Result<T::AccountId, Error<T>> {
            let mut current = account.clone();
            let mut hops = 0u32;
            while let Some(next) = SupersededBy::<T>::get(&current) {
                hops += 1;
                if hops > MAX_SUPERSESSION_HOPS {
                    log::error!(
                        target: "pallet-share-register",
                        "supersession chain exceeded {MAX_SUPERSESSION_HOPS} hops"
                    );
                    return Err(Error::<T>::SupersessionChainCorrupted);
                }
                current = next;
            }
            Ok(current)
        }
    }

    /// Shareholder arena maintenance. Exclusively owned by this pallet; the
    /// operations above are the only writers.
    impl<T: Config> Pallet<T> {
        /// Append `account` to the arena if it is not already indexed.
        fn index_holder(account: &T::AccountId) {
            if HolderIndices::<T>::contains_key(account) {
                return;
            }
            let slot = HolderCount::<T>::get();
            Holders::<T>::insert(slot, account);
            HolderIndices::<T>::insert(account, slot);
            HolderCount::<T>::put(slot + 1);
        }

        /// Remove `account` from the arena by swapping the last slot into its
        /// place and truncating. O(1); no-op if the account is not indexed.
        fn drop_holder(account: &T::AccountId) {
            let Some(slot) = HolderIndices::<T>::take(account) else {
                return;
            };
            let last = HolderCount::<T>::get().saturating_sub(1);
            if slot != last {
                if let Some(moved) = Holders::<T>::get(last) {
                    Holders::<T>::insert(slot, &moved);
                    HolderIndices::<T>::insert(&moved, slot);
                }
            }
            Holders::<T>::remove(last);
            HolderCount::<T>::put(last);
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Register name
        pub token_name: Vec<u8>,
        /// Register symbol
        pub token_symbol: Vec<u8>,
        /// Accounts verified at genesis, with their identity fingerprints
        pub verified: Vec<(T::AccountId, T::Hash)>,
        /// Initial balances (every account must appear in `verified`)
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if !self.token_name.is_empty() {
                let name: BoundedVec<u8, ConstU32<64>> = self
                    .token_name
                    .clone()
                    .try_into()
                    .expect("Register name too long (max 64 bytes)");
                TokenName::<T>::put(name);

                let symbol: BoundedVec<u8, ConstU32<16>> = self
                    .token_symbol
                    .clone()
                    .try_into()
                    .expect("Register symbol too long (max 16 bytes)");
                TokenSymbol::<T>::put(symbol);

                Created::<T>::put(true);
            }

            for (account, fingerprint) in &self.verified {
                assert!(
                    *fingerprint != T::Hash::default(),
                    "Zero fingerprint in genesis verified set"
                );
                Fingerprints::<T>::insert(account, fingerprint);
            }

            let mut total: u128 = 0;
            for (account, balance) in &self.initial_balances {
                assert!(
                    Fingerprints::<T>::contains_key(account),
                    "Genesis balance for unverified account"
                );
                Balances::<T>::insert(account, balance);
                if *balance > 0 {
                    Pallet::<T>::index_holder(account);
                }
                total = total.saturating_add(*balance);
            }
            TotalSupply::<T>::put(total);
        }
    }
}
