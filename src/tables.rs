//! Power-of-five lookup tables.
//!
//! The split tables carry `5^(56k)` and `5^-(56k)` at 249 significant
//! bits; [`crate::pow5`] combines them with the exact small powers in
//! [`POW5_TABLE`] and the packed per-index corrections to reconstruct
//! any power in range.

use super::uint256::u256;
use super::util::const_assert;

/// Exact powers `5^k` for `0 <= k <= 55`.
// This is a const initializer, so the indexing is checked at compile
// time.
#[allow(clippy::indexing_slicing)]
pub(crate) const POW5_TABLE: [u128; 56] = {
    let mut t = [0u128; 56];
    let mut k = 0;
    while k < t.len() {
        t[k] = 5u128.pow(k as u32);
        k += 1;
    }
    t
};

/// `5^(56k)` normalized to 249 significant bits, rounded down.
///
/// Entry `k` is `floor(5^(56k) * 2^(249 - pow5bits(56k)))`.
pub(crate) const POW5_SPLIT: [u256; 89] = [
    u256::new(0x01000000000000000000000000000000, 0x00000000000000000000000000000000),
    u256::new(0x0105031e2503da893f7ff1e21cf51243, 0x48400000000000000000000000000000),
    u256::new(0x010a1f5b813246653c07c59ed78c09bb, 0x60e94fde0330f2212ea2eebee3d257e5),
    u256::new(0x010f5535fef208450d21f689a5e0ba10, 0x85f6231f93842f43a5640967b2d0deab),
    u256::new(0x0114a52dffc679925f057ad6e1b33554, 0xdf78218b8b9b52f91baf2497ff066293),
    u256::new(0x011a0fc668aac6fd65b61690f6c847c3, 0xd0fd8c6e61ea01680d4cfa0e5a78ff42),
    u256::new(0x011f9584aeab1dc9cc42749e154bd14f, 0x632920c7b148de181ca8de546bb86cfc),
    u256::new(0x012536f0e3bcfe45723860deba3616bf, 0xbe405b12a22d552d7ca0c234c4381dc7),
    u256::new(0x012af495c3d7efe7a74fd53910719d28, 0x6e7823b0861ab89005ff4ce7144fb9ef),
    u256::new(0x0130cf00c24fd9c9e97e3a9395999abc, 0xd050974c01dd3ec606b7e6d81e817bd3),
    u256::new(0x0136c6c21772487c8ccaa9298b92baef, 0xe4e7e4dd705ed700cd4dd26f069da25c),
    u256::new(0x013cdc6cce67f0aac205c010727fac16, 0xab1f0d0d11f1d6f3d619a96ecc15b8d2),
    u256::new(0x01431096d35bc492c8abc09b749677a9, 0xbb0982143a45eb5b8a7df7300fb0da78),
    u256::new(0x014963d901e8f9095a896444e83d63d7, 0x7e3f8046e188a34eabe0ca112803be67),
    u256::new(0x014fd6cf33d15d933239e94b877813f4, 0xdeeb2667019d6a09194c5a1b506df9cf),
    u256::new(0x01566a184ffd7215987894aea2a36529, 0xb90058810a0d1a5baaf4801bf041e12d),
    u256::new(0x015d1e5659c7abb7d30e151b0e473b1e, 0x6a825fd3ce55fa6abde916a26ebbe0dd),
    u256::new(0x0163f42e809461cbd1bb253e1387dfeb, 0x59ca7fa7f96b69be4b103106a4326024),
    u256::new(0x016aec492fb7e2f53c32636b0752863a, 0xfc6fdb05fd38ebf99e4e19b3e2691d66),
    u256::new(0x017207521eac3a4bc5c61b607c1f1ba5, 0x0cd4ecd37bf8ded33912336034b67b3d),
    u256::new(0x017945f8619833e1213d6b9632c8ea11, 0x8affc81bdfc2fcabebe08c2a4d684035),
    u256::new(0x0180a8ee7a2937e4d6497a98000855a2, 0x4a1b763882dd7ccc3facf7e6a8452f17),
    u256::new(0x018830ea68c19b9952fd461b7afd48f3, 0xc6dd58610b2879981fba126325deaa11),
    u256::new(0x018fdea5bdfd0f6ea2ec9e99f22d69bd, 0x9cbabab52a33c69485fc9fe41b6da4bb),
    u256::new(0x0197b2ddac8cd9e1037d6ff7b8397d16, 0x6ee486a50d75e1d09db15bf65c009298),
    u256::new(0x019fae531b6d972ce5b9c8e58c33547e, 0xc618d721710e9aa313c0f83c8709eb29),
    u256::new(0x01a7d1cab8783e87a1c8fbdf829480dc, 0x9fd51a2d7b2a89c91cbbb2058d1f4891),
    u256::new(0x01b01e0d0b503655036e2af8c144940a, 0xd3d5cd85086ea5586a2447af26af7db9),
    u256::new(0x01b893e688b049c6c1f61731ed7789e1, 0x97998a5846dbd9aef19fee5ac978f3c8),
    u256::new(0x01c13427a6185b74c58d8d82ec9c08fc, 0x2abc57bbafa2553c846e63eed720bbff),
    u256::new(0x01c9ffa4edddb9ccb10fd1b9f813b786, 0x75783476e4d6f1328fd6b1b1de55b4f8),
    u256::new(0x01d2f73713a003b5676346c8551b479e, 0x9f51e128817d2f7fcc4934b80db8babb),
    u256::new(0x01dc1bbb09249571185a80e1e6764356, 0xf7840af1f470a291177e69fef2c60519),
    u256::new(0x01e56e12139a7fa6b9457e18c75029c0, 0x9dad233c082253434e005a0a2262e6c3),
    u256::new(0x01eeef21e149148b9c11e2732b9f384e, 0x8fcf41511303a341f23f50fe5159e3b9),
    u256::new(0x01f89fd49fab216814f46f327d642889, 0xf590a3767f35d6242236dff15f7cb136),
    u256::new(0x0101408c88fc7a93e36f635b539bd750, 0x9b767f093152e5e31dde4749978073e1),
    u256::new(0x010649f15411afa822198d0cd8bad365, 0x97e463e96f32d6e4f059889e56c056c4),
    u256::new(0x010b6c94cb20eecc1cffc568611b97e3, 0x471535f9b79281cdf304592ec5347498),
    u256::new(0x0110a8f5763b1cb7b23ae7de7d558792, 0xc83e230a5441da678becd9f9e85a912d),
    u256::new(0x0115ff9457a3f10a923c6852363deacd, 0x8e637c29040299b5e0c61275a1955b60),
    u256::new(0x011b70f4f83cadb0e73d2707ae7a90d1, 0x03424d865fe91057d156a1ed2090e71d),
    u256::new(0x0120fd9d742d129367398bdca32c5802, 0x348f41c2bbf8f30d71cafccb2865614e),
    u256::new(0x0126a61687cbc5825282680f9fdd592e, 0x87a39776fa00b4eda714dff2a0b33f15),
    u256::new(0x012c6aeb9cc76c665afdf4fa53889c23, 0x6ead4620c44f70ee0da9cd6dd08eaa19),
    u256::new(0x01324caad791bdfc86b50910b2c8ba38, 0xdf6d3e034c83b45485b06b9216130844),
    u256::new(0x01384be5250dd3bb6ca3dbd512f668c0, 0x3e0f29fabcb4a3585f3615ce78409d9a),
    u256::new(0x013e692e48830df9496a0011b24a53d2, 0x3e656e20a44744e6ca6260909f614c3b),
    u256::new(0x0144a51ce9d5e203f9e13cf017990471, 0xb2bd32fd3e8baf12fb19a06caa7e7143),
    u256::new(0x014b004aa407f0968e74b0510d2e0342, 0xcb41d5e7ec5b82eef9c3f16876116ba1),
    u256::new(0x01517b541400c9f489164634e1d6a889, 0x9caf0de724fd62b7aa78fec5c62a9f4e),
    u256::new(0x015816d8e7a0cbf199f437bc3e8e6aad, 0x49087fbba218e00d703d78494339ae14),
    u256::new(0x015ed37bed1f8d4e80ee61c00843b49a, 0xaa01b6fb233626d8d08d6d55c699fa4d),
    u256::new(0x0165b1e322b751194aff2b396e04653a, 0x28c381dbaad77967d0389db9707f8989),
    u256::new(0x016cb2b7c69f042926818740e2441eaa, 0xcf398762ad36264b488519081a48e705),
    u256::new(0x0173d6a667544e5d3623891a057064d7, 0xa77dfe24501ab42ced7d705ce68f0fd8),
    u256::new(0x017b1e5ef43748fadaacceca8c37a5ec, 0x3769297992daa7c938604693c25e8b8e),
    u256::new(0x01828a94ce7973639d7112031c9edd34, 0xa4862711d8d158f44cae09d7ebe2d28d),
    u256::new(0x018a1bfeda61875df9f0a667529090cb, 0x3e265a063f83a3fd80b4608622cd5f36),
    u256::new(0x0191d35790e5d657823435d5cf9f153a, 0x7bf110931480440caeeae7a967ffc974),
    u256::new(0x0199b15d119ee15b0825c53e13b20c2c, 0x13939f33006b522cc96bd5dee882a23d),
    u256::new(0x01a1b6d13513e5f363beec028af94416, 0x6b18a7cf7dd948af1ee75da9e3211e9a),
    u256::new(0x01a9e4799f6322dbeb97b9a05e4798ed, 0x209293a1284970ec4cb5b7aaad2dc39b),
    u256::new(0x01b23b1fd347a0339888513ba436b13a, 0xf53701559036a0ec547ea0199e9d406b),
    u256::new(0x01babb91457e4fe7ef2b54231d83a106, 0x2f1213c8494225479a26994cf4cf3709),
    u256::new(0x01c3669f708c643a08e589a595ae7614, 0xf6028688cc142eb86dd13c79ee67b3fe),
    u256::new(0x01cc3d1fe8e8c39b53c41511e2269f20, 0xda16222c14ddb6beaed181458d805b5d),
    u256::new(0x01d53fec718a8aa9c38f923ab8683da7, 0x3b542759743caa23ea8ff4a920ce82ac),
    u256::new(0x01de6fe310de96cd21ecb3dbc42b348b, 0xd957c6692d5fec53686ca8c1db224e38),
    u256::new(0x01e7cde626261de1def1b28d7572a970, 0x5e6a1d22bee0ab6371c997e9598ff746),
    u256::new(0x01f15adc7f40617a2b93628e9b1f1384, 0xd3e9a9a64046f3053dcd25599bf4b7b0),
    u256::new(0x01fb17b16ee1968d3cd63a4e8a681cf6, 0x29d0f1db6ce0e584dbd940031d4771a3),
    u256::new(0x010282aa719c9277abe45ca05f9ba979, 0x4402a3b9af4a6911879cbfd9293570f9),
    u256::new(0x0107925dbe84b6525af82e6bf8770279, 0x19cea5ea785f1f4d82bc2e63f7ff1806),
    u256::new(0x010cbb6f5399a5073c06cea0151d342f, 0x1fbe1fa4005fed67476aa4205d507e8f),
    u256::new(0x0111fe5e575bce8a639358a08ebc4a52, 0x74e364add9b2a88698eca0f75fc01d90),
    u256::new(0x01175bac6d9891668210f365cbeddd16, 0x39586ede5168bcb598bc40eb7451346c),
    u256::new(0x011cd3ddc3e47e57ca5e678ca57a25f5, 0x6f6fef0da29ab02e7b570fb0bcc623d0),
    u256::new(0x012267791e54261fcb5ad4c61151d16a, 0xae6bb8483033bce304ffdb36d1aee4ab),
    u256::new(0x01281707e474ab08553b7548cbdfc283, 0x41ca827b28282854aae515ce5133a97a),
    u256::new(0x012de3162e8555aea311193565f8b668, 0x6e30dde587359682061eee8028a48df7),
    u256::new(0x0133cc32d2f372f1e374010c8ce3a20a, 0x7f7ecdacd9869e032fb1761f7443078d),
    u256::new(0x0139d2ef7419c7417ac3ab3a80555c9f, 0xd4df55865ab3983ebb36e3da59d6f21c),
    u256::new(0x013ff7e08e44ea0893007839b0c8066f, 0x0232905f41588acd394154dabcc73239),
    u256::new(0x01463b9d85fde2966145142a2e4b4abc, 0x2120154785e05593a92b53293c09717f),
    u256::new(0x014c9ec0b69c66a59ab708a55e4605fc, 0x277b1d9f247a477d80759f292db5bc19),
    u256::new(0x015321e78122218a890570995790517f, 0x27bdc2c55142490aa0c40884ba56b1d0),
    u256::new(0x0159c5b25b607216b31a53baa245c84f, 0x1acdf443099dc170c212344cb1c0c73e),
    u256::new(0x01608ac4df6a146bceb1f1fbc058074d, 0x8dbda2f384db3570510159b4226648eb),
];

/// `5^-(56k)` at the same precision, less one.
///
/// Entry `k` is `ceil(2^(248 + pow5bits(56k)) / 5^(56k)) - 1`; the
/// oracle adds the one back (plus the per-index correction).
pub(crate) const POW5_INV_SPLIT: [u256; 89] = [
    u256::new(0x01ffffffffffffffffffffffffffffff, 0xffffffffffffffffffffffffffffffff),
    u256::new(0x01f62b0b257c0d1a5dddadc5e1e1aace, 0x25585c9e2c59f5a815d778eb40769ac1),
    u256::new(0x01ec866b79e0cba6fa9a8c2f6bfe942d, 0xab5412a03ab2a94ab3dc337f4d28ff1c),
    u256::new(0x01e3113363787f1943b889cd87964f35, 0x83f01e6c2e8e619469b1030355a33ae8),
    u256::new(0x01d9ca79d894629d7b49f17eac6a48c8, 0x508c1358b8f133946d37b7f8424c1ba3),
    u256::new(0x01d0b15a491eb84593a366801f1f39fe, 0xd1f221f3ec90465e28d480c11fc21bcf),
    u256::new(0x01c7c4f4889b1b316ffa363646102d36, 0x4a6c763e58ad1b87c4e899d3337fda42),
    u256::new(0x01bf046cb892f6a8a79650b9d65fda08, 0x1b17eefa978b366b63afd78c374ef53c),
    u256::new(0x01b66eeb336c0e8489098cc79dcd70dc, 0xf84e4d89150a713f4eb914bb8cbae8b4),
    u256::new(0x01ae039c77a70f7e8f8ca9a0e4e3cd87, 0x3f422c81345fbe3d3da7408f33c88e75),
    u256::new(0x01a5c1b1138427fac1c0175b1bf81b19, 0x1ce5b67782b618e029b5e5bd807d8186),
    u256::new(0x019da85d910bb3b77d50abc24e227910, 0xf780566055125703b88fbef1573d2512),
    u256::new(0x0195b6da62790e6df85fffe251350098, 0xb584dff71d02a64e4b2582f5965a11ab),
    u256::new(0x018dec63cf05aae12d60ac1848df21d3, 0xd00d39f1ea3a5cbccac04791f42faf62),
    u256::new(0x01864839e012951ce11cb45ca22d75e3, 0x22dac1a05d58c613dd98eeb9196dbc3b),
    u256::new(0x017ec9a04eae8fbce124ac4981afb266, 0x2e3f6c0d3f164df080a346947cce8909),
    u256::new(0x01776fde717704fe5ada954b6a176bb8, 0x1a01bce7b3ab7cd2e84edc7e1ecfe0aa),
    u256::new(0x01703a3f2ad20d1b1c49a4ad8a814a06, 0x12dc679b9b486ce4ed89cb45f0c98807),
    u256::new(0x01692810d77fd4018769c97cb6c8abdf, 0x2c6e73e2b60d5878edee442e8364439e),
    u256::new(0x016238a53d81b0e4d18de0eb89703f8e, 0x5ada505fc36e2250f3fa6939e01743c1),
    u256::new(0x015b6b517b554a60a2c26c6d0d2c3483, 0xca50c563ec3ac9bb86fb6367f1c201d6),
    u256::new(0x0154bf6df7822a02170a1618b2ed6420, 0x4f504be65791ed6101de2c7be5f52dd3),
    u256::new(0x014e3456507829f74d0019f570189c5d, 0x62decb076b66daa84c8c7695697a8f1e),
    u256::new(0x0147c9694cbd2f6ed5f5a57c2cf2ecbe, 0x4ed7e7dd4decc34655e1a019d93b5ee8),
    u256::new(0x01417e08cb68abd242dc3efe2c85d755, 0x905045c71f5ee964dcc7bbf6d1f2e361),
    u256::new(0x013b5199b4eb66836b4b8b1abf2348ed, 0xafe6da35aef3721c139c428806a8bfad),
    u256::new(0x01354383ec22181ba11f10afd0ebceee, 0x9dc82bb164ad284a14a1efef82623355),
    u256::new(0x012f53323fb1675f8070f1314dc45f04, 0x3736c2455456e54279f75e0769152cb4),
    u256::new(0x012980125ba9df2a22879ee3ab89faf0, 0xd0c9a3e2bb45828d63f809bef0691148),
    u256::new(0x0123c994bb727b7fd8ace010cd70baaf, 0xfd16cc91d283bcef3791b0d3daac35e3),
    u256::new(0x011e2f2c9bf872c3e482daff3563cceb, 0x00be0fc3c2012fa8fef61cc6eb9518ef),
    u256::new(0x0118b04fee22e6b68db05de50c04e7bd, 0x1bc0402e2eb7e0818d25dcff9c8e88f3),
    u256::new(0x01134c7749892f6a1cd9075a24c1fe41, 0xe98131cdda17f7aded6c4b265238ed12),
    u256::new(0x010e031ddf6a78c64ad22708b361f4e5, 0xa88d39fa5cd94654ef00163c2693fde4),
    u256::new(0x0108d3c16de5717b36d444921d1d3d93, 0x17cfbe0d78c27fb44370ba720a8cb166),
    u256::new(0x0103bde2336ed06f91f4e1734594c160, 0x08c311b703591ceebb897cad90669226),
    u256::new(0x01fd8205c50af783f2d8cad8763e593b, 0x23d5048560061c94a32b13e8c6f4a197),
    u256::new(0x01f3b9512b4644c8122cd82be8acf0d8, 0x4e47973d3bf2663fc990e018220e3481),
    u256::new(0x01ea20b586d03e4e2cbf070b675105fe, 0x98f2da150241002a265f9791bf2943aa),
    u256::new(0x01e0b7466603038ea199f63985de3e89, 0xbdd6420de86befc3abb72f311bad6eed),
    u256::new(0x01d77c1be19040358a262acb7c67bb52, 0x34199824527e3af4b1d18beb4c7fa1f7),
    u256::new(0x01ce6e52862f2e0df85412d37f10cf27, 0x2ceef9365bf7dbc0f3a899d332778cc2),
    u256::new(0x01c58d0b3eb8508460863216a47f0e57, 0x393aeddde582a87ccb17204616681393),
    u256::new(0x01bcd76b3eacce59b518233e6d004248, 0x27c1dc8f808393bc1e53eec1de22be50),
    u256::new(0x01b44c9bed27587c60e85571e70c8ac5, 0x913a338683ebe85e5541e0ecca5ed35a),
    u256::new(0x01abebcad03497250a7a49cd1b8204e4, 0x8d971db5d03452b10f423db79acbba30),
    u256::new(0x01a3b4297891204bd46e6ce6153c8ffd, 0xf1930f3f8850d3ec21744863b10be56f),
    u256::new(0x019ba4ed6dcb04509fadd476e66053de, 0x171944460ab0335ea9a7cff76e480749),
    u256::new(0x0193bd501ac50746988e967963fc3ad4, 0xff3f6aec08d566a03084065f3f2e37f8),
    u256::new(0x018bfc8eba99a6b9fe8cd0cefabe8d85, 0x370c14ea91297341795aba2310798260),
    u256::new(0x018461ea45dc14ff859f828f5bc90874, 0x48eb2261248419366ab6f2eea4aa2d7f),
    u256::new(0x017ceca760355c27cbdf0999339698ba, 0x2ff69b28810455e8a4a08e11ce31696c),
    u256::new(0x01759c0e465be39004f898cba2b8c298, 0xac6b351f41a029734f10fbdbca0fe56c),
    u256::new(0x016e6f6abc639bbc095211fa9510e516, 0xd5588d4f67e569669c3a85f4d16257b6),
    u256::new(0x0167660bfc651cae3f25c3783f7667e3, 0x1a8f9362d5fd1fbee9d87c9cbf8d606c),
    u256::new(0x01607f44a57a0b502a794b4ea81b3aad, 0x92e2086d2492954e8635b5b5ddbefad3),
    u256::new(0x0159ba6aab0d22b3a3d88382f27ad3a1, 0xa238b5e77a9a58c16ad73aa7183259f6),
    u256::new(0x015316d7447c46018f69673bb3bb71a6, 0x2e75be61fe5d62c7a9c65ebc101c6d69),
    u256::new(0x014c93e6dd0b07d0349ab665ee27afe8, 0xede6d34238decd80b518c87dc60f7ffd),
    u256::new(0x014630f904241b59cce8038de123f0ee, 0x4e104a38c03c68c8ac81db00ad5eed58),
    u256::new(0x013fed705de82ba444c1b7b1548876ac, 0x1ef48cd4eb7ce7b6420cf13a070d2e28),
    u256::new(0x0139c8b294089c1e37bb5b700aef720d, 0x7ba7bcac1dc680456492357491bf81c6),
    u256::new(0x0133c22846ecbd83a04308e0dd48d498, 0x70e5d27fc199cf9fb2641c33f11e22c3),
    u256::new(0x012dd93cff2009073758e7e044ddfebd, 0x4277b0ea8ec77b79434a7eb2a1dd843b),
    u256::new(0x01280d5f1f07fac4ca969bc69c1d787c, 0x0c8bdf60be419e91673056c9d2a7589c),
    u256::new(0x01225dffd4e02b658b8230ff418315b7, 0x7c2f120c3ae2fa8a993f40e43cccf235),
    u256::new(0x011cca930cfb4fa23480a9ea6c0493d7, 0xa2525f1e5931afe8997ab2ad1dfb737f),
    u256::new(0x0117528f6447caf07c590fe316728f15, 0x45bcb7a8ae584b50616c16ae2c95a502),
    u256::new(0x0111f56e1b16892a547e3f27e3287953, 0x6c894cd4dadfaca6f617b818cf4440d0),
    u256::new(0x010cb2ab0822d95e7884a17c5dd750fa, 0x2a442ecd232f582a098d41ac94e242e5),
    u256::new(0x010789c48bda0a3b836f05b63f8d5749, 0x362ac2fb4043713f25f327e31bc01b91),
    u256::new(0x01027a3b83e18ea9ac036046f1480b68, 0x4249fdb2a10f7200ddfed55ccd34b41b),
    u256::new(0x01fb07267db4ee5816a0a5d2513e1e46, 0x6690649c4ea6edbfbb3d7252d98ae93b),
    u256::new(0x01f14aa2e0c22512f884d14a9ee17a51, 0x895c2c324821a626bda3e8c5062d62b8),
    u256::new(0x01e7bdfc4a8f1c0e941d0bf8fe9db7a7, 0x957d88cddc36b0c685477550980936a5),
    u256::new(0x01de60477014e65b27eb4f001e47decf, 0x70f39279fe23e12632612087a2556b61),
    u256::new(0x01d5309d8afbcd3e26cdd0924a7cbb41, 0x8430e8df98d4321b7372712f4d9eba7c),
    u256::new(0x01cc2e1c43652208ae04b51c3cbb7683, 0xac6c24875096aaae9b4ae07eb9cf4c33),
    u256::new(0x01c357e59a2240cc2022a24a0d03ab2e, 0x0b633fb11fc50b6778c39a8cab7ec9a4),
    u256::new(0x01baad1fd356ab268962f9b0dcff9d9c, 0xea9f430c181150b246fc88fb66031ff7),
    u256::new(0x01b22cf561832caf3151dbffb99fc9b6, 0x97e5202c66a1d967d7b5bb2c8be6c196),
    u256::new(0x01a9d694d0f804a7d13cc03ce0f45869, 0x108a3d0abb159df06afcc8a037d2b5ae),
    u256::new(0x01a1a930b3ac1a81479f5bed6554f89e, 0x87dd42e7b43e1d6f68a832a141fb8569),
    u256::new(0x0199a3ff8d774c7c43003c708c6307f9, 0x11c831d242f9d06eaaa9163d01529e68),
    u256::new(0x0191c63bc0adf13832122aac9b1560af, 0xdc4b60832ecbfbf9b7c96eb5c4f7d8a1),
    u256::new(0x018a0f237b1bae5db678abe7f28ffde1, 0xd2b8cf74b0d018999dfe4858ad3783ea),
    u256::new(0x01827df8a35bcfbec9c0bfc840f947aa, 0x109c798707d542f6f60667aa219e4fcb),
    u256::new(0x017b1200c68d53469b1044ffbf82756a, 0x7b3e2cb8073d5adaef45a478af9fd773),
    u256::new(0x0173ca850660e6e6c57bb65bfbc7f14d, 0xc6e74e701575094d63b436787ba7112b),
];

/// Truncation corrections for [`POW5_SPLIT`], two bits per index.
pub(crate) const POW5_ERRORS: [u64; 156] = [
    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x9555596400000000,
    0x65a6569525565555, 0x4415551445449655, 0x5105015504144541, 0x65a69969a6965964,
    0x5054955969959656, 0x5105154515554145, 0x4055511051591555, 0x5500514455550115,
    0x0041140014145515, 0x1005440545511051, 0x0014405450411004, 0x0414440010500000,
    0x0044000440010040, 0x5551155000004001, 0x4554555454544114, 0x5150045544005441,
    0x0001111400054501, 0x6550955555554554, 0x1504159645559559, 0x4105055141454545,
    0x1411541410405454, 0x0415555044545555, 0x0014154115405550, 0x1540055040411445,
    0x0000000500000000, 0x5644000000000000, 0x1155555591596555, 0x0410440054569565,
    0x5145100010010005, 0x0555041405500150, 0x4141450455140450, 0x0000000144000140,
    0x5114004001105410, 0x4444100404005504, 0x0414014410001015, 0x5145055155555015,
    0x0141041444445540, 0x0000100451541414, 0x4105041104155550, 0x0500501150451145,
    0x1001050000004114, 0x5551504400141045, 0x5110545410151454, 0x0100001400004040,
    0x5040010111040000, 0x0140000150541100, 0x4400140400104110, 0x5011014405545004,
    0x0000000044155440, 0x0000000010000000, 0x1100401444440001, 0x0040401010055111,
    0x5155155551405454, 0x0444440015514411, 0x0054505054014101, 0x0451015441115511,
    0x1541411401140551, 0x4155104514445110, 0x4141145450145515, 0x5451445055155050,
    0x4400515554110054, 0x5111145104501151, 0x565a655455500501, 0x5565555555525955,
    0x0550511500405695, 0x4415504051054544, 0x6555595965555554, 0x0100915915555655,
    0x5540001510001001, 0x5450051414000544, 0x1405010555555551, 0x5555515555644155,
    0x5555055595496555, 0x5451045004415000, 0x5450510144040144, 0x5554155555556455,
    0x5051555495415555, 0x5555554555555545, 0x0000000010005455, 0x4000005000040000,
    0x5565555555555954, 0x5554559555555505, 0x9645545495552555, 0x4000400055955564,
    0x0040000000000001, 0x4004100100000000, 0x5540040440000411, 0x4565555955545644,
    0x1140659549651556, 0x0100000410010000, 0x5555515400004001, 0x5955545555155255,
    0x5151055545505556, 0x5051454510554515, 0x0501500050415554, 0x5044154005441005,
    0x1455445450550455, 0x0010144055144545, 0x0000401100000004, 0x1050145050000010,
    0x0415004554011540, 0x1000510100151150, 0x0100040400001144, 0x0000000000000000,
    0x0550004400000100, 0x0151145041451151, 0x0000400400005450, 0x0000100044010004,
    0x0100054100050040, 0x0504400005410010, 0x4011410445500105, 0x0000404000144411,
    0x0101504404500000, 0x0000005044400400, 0x0000000014000100, 0x0404440414000000,
    0x5554100410000140, 0x4555455544505555, 0x5454105055455455, 0x0115454155454015,
    0x4404110000045100, 0x4400001100101501, 0x6596955956966a94, 0x0040655955665965,
    0x5554144400100155, 0xa549495401011041, 0x5596555565955555, 0x5569965959549555,
    0x969565a655555456, 0x0000001000000000, 0x0000000040000140, 0x0000040100000000,
    0x1415454400000000, 0x5410415411454114, 0x0400040104000154, 0x0504045000000411,
    0x0000001000000010, 0x5554000000001040, 0x5549155551556595, 0x1455541055515555,
    0x0510555454554541, 0x9555555555540455, 0x6455456555556465, 0x4524565555654514,
    0x5554655255559545, 0x9555455441155556, 0x0000000051515555, 0x0010005040000550,
    0x5044044040000000, 0x1045040440010500, 0x0000400000040000, 0x0000000000000000,
];

/// Truncation corrections for [`POW5_INV_SPLIT`], two bits per index.
pub(crate) const POW5_INV_ERRORS: [u64; 154] = [
    0x1144155514145504, 0x0000541555401141, 0x0000000000000000, 0x0154454000000000,
    0x4114105515544440, 0x0001001111500415, 0x4041411410011000, 0x5550114515155014,
    0x1404100041554551, 0x0515000450404410, 0x5054544401140004, 0x5155501005555105,
    0x1144141000105515, 0x0541500000500000, 0x1104105540444140, 0x4000015055514110,
    0x0054010450004005, 0x4155515404100005, 0x5155145045155555, 0x1511555515440558,
    0x5558544555515555, 0x0000000000000010, 0x5004000000000050, 0x1415510100000010,
    0x4545555444514500, 0x5155151555555551, 0x1441540144044554, 0x5150104045544400,
    0x5450545401444040, 0x5554455045501400, 0x4655155555555145, 0x1000010055455055,
    0x1000004000055004, 0x4455405104000005, 0x4500114504150545, 0x0000000014000000,
    0x5450000000000000, 0x5514551511445555, 0x4111501040555451, 0x4515445500054444,
    0x5101500104100441, 0x1545115155545055, 0x0000000000000000, 0x1554000000100000,
    0x5555545595551555, 0x5555051851455955, 0x5555555555555559, 0x0000400011001555,
    0x0000004400040000, 0x5455511555554554, 0x5614555544115445, 0x6455156145555155,
    0x5455855455415455, 0x5515555144555545, 0x0114400000145155, 0x0000051000450511,
    0x4455154554445100, 0x4554150141544455, 0x65955555559a5965, 0x5555555854559559,
    0x9569654559616595, 0x1040044040005565, 0x1010010500011044, 0x1554015545154540,
    0x4440555401545441, 0x1014441450550105, 0x4545400410504145, 0x5015111541040151,
    0x5145051154000410, 0x1040001044545044, 0x4001400000151410, 0x0540000044040000,
    0x0510555454411544, 0x0400054054141550, 0x1001041145001100, 0x0000000140000000,
    0x0000000014100000, 0x1544005454000140, 0x4050055505445145, 0x0011511104504155,
    0x5505544415045055, 0x1155154445515554, 0x0000000000004555, 0x0000000000000000,
    0x5101010510400004, 0x1514045044440400, 0x5515519555515555, 0x4554545441555545,
    0x1551055955551515, 0x0150000011505515, 0x0044005040400000, 0x0004001004010050,
    0x0000051004450414, 0x0114001101001144, 0x0401000001000001, 0x4500010001000401,
    0x0004100000005000, 0x0105000441101100, 0x0455455550454540, 0x5404050144105505,
    0x4101510540555455, 0x1055541411451555, 0x5451445110115505, 0x1154110010101545,
    0x1145140450054055, 0x5555565415551554, 0x1550559555555555, 0x5555541545045141,
    0x4555455450500100, 0x5510454545554555, 0x1510140115045455, 0x1001050040111510,
    0x5555454555555504, 0x9954155545515554, 0x6596656555555555, 0x0140410051555559,
    0x0011104010001544, 0x965669659a680501, 0x5655a55955556955, 0x4015111014404514,
    0x1414155554505145, 0x0540040011051404, 0x1010000000015005, 0x0010054050004410,
    0x5041104014000100, 0x4440010500100001, 0x1155510504545554, 0x0450151545115541,
    0x4000100400110440, 0x1004440010514440, 0x0000115050450000, 0x0545404455541500,
    0x1051051555505101, 0x5505144554544144, 0x4550545555515550, 0x0015400450045445,
    0x4514155400554415, 0x4555055051050151, 0x1511441450001014, 0x4544554510404414,
    0x4115115545545450, 0x5500541555551555, 0x5550010544155015, 0x0144414045545500,
    0x4154050001050150, 0x5550511111000145, 0x1114504055000151, 0x5104041101451040,
    0x0010501401051441, 0x0010501450504401, 0x4554585440044444, 0x5155555951450455,
    0x0040000400105555, 0x0000000000000001,
];


// Two-bit corrections for every index the oracle serves.
const_assert!(POW5_ERRORS.len() * 32 > 4968);
const_assert!(POW5_INV_ERRORS.len() * 32 > 4897);
