//! Contract code shipped as hex-encoded BoC

/// Standard collection
pub const STANDARD_COLLECTION_CODE: &str = "\
    b5ee9c72410213010001fe000114ff00f4a413f4bcf2c80b0102016204020201200e030025bc82df6a2687d20699fea6\
    a6a182de86a182c40202cd0a050201200706003d45af0047021f005778018c8cb0558cf165004fa0213cb6b12ccccc97\
    1fb0080201200908001b3e401d3232c084b281f2fff27420002d007232cffe0a33c5b25c083232c044fd003d0032c032\
    6003ebd10638048adf000e8698180b8d848adf07d201800e98fe99ff6a2687d20699fea6a6a184108349e9ca829405d4\
    7141baf8280e8410854658056b84008646582a802e78b127d010a65b509e58fe59f80e78b64c0207d80701b28b9e382f\
    970c892e000f18112e001718119026001f1812f82c207f97840d0c0b002801fa40304144c85005cf1613cb3fccccccc9\
    ed5400a6357003d4308e378040f4966fa5208e2906a4208100fabe93f2c18fde81019321a05325bbf2f402fa00d43022\
    544b30f00623ba9302a402de04926c21e2b3e6303250444313c85005cf1613cb3fccccccc9ed5400603502d33f5313bb\
    f2e1925313ba01fa00d43028103459f0068e1201a44343c85005cf1613cb3fccccccc9ed54925f05e2020120120f0201\
    201110002db4f47da89a1f481a67fa9a9a86028be09e008e003e00b0002fb5dafda89a1f481a67fa9a9a860d883a1a61\
    fa61ff4806100043b8b5d31ed44d0fa40d33fd4d4d43010245f04d0d431d430d071c8cb0701cf16ccc98f34ea10e";

/// Standard collection with modified content layout and balance return
pub const STANDARD_MODIFIED_COLLECTION_CODE: &str = "\
    b5ee9c724102140100020d000114ff00f4a413f4bcf2c80b0102016202030202cc04050201200e0f04e7d90638048adf\
    000e8698180b8d848adf07d201800e98fe99ff6a2687d20699fea6a6a184108349e9ca829405d47141baf8280e841085\
    4658056b84008646582a802e78b127d010a65b509e58fe59f80e78b64c0207d807029c26382f970c893e000f18113e00\
    171811a136001f1812f8290e002c060708090201480a0b006436363602d33f5313bbf2e1925313ba01fa00d430271034\
    59f00b8e1201a45521c85005cf1613cb3fccccccc9ed54925f05e200a63636367003d4308e378040f4966fa5208e2906\
    a4208100fabe93f2c18fde81019321a05325bbf2f402fa00d43022544a30f00b23ba9302a402de04926c21e2b3e63032\
    4434c85005cf1613cb3fccccccc9ed54002e35353501fa40305530c85005cf1613cb3fccccccc9ed5400548e21708018\
    c8cb055004cf1623fa0213cb6acb1fcb3f820afaf08070fb02c98306fb00e05f03840ff2f0002d501c8cb3ff828cf16c\
    97020c8cb0113f400f400cb00c980201200c0d001b3e401d3232c084b281f2fff27420003d16bc025c087c029de00632\
    32c15633c594013e8084f2dac4b333325c7ec0200201201011001fbc82df6a2687d20699fea6a6a182dac40007b8b5d3\
    180201201213002fb5dafda89a1f481a67fa9a9a860d883a1a61fa61ff480610002db4f47da89a1f481a67fa9a9a8602\
    8be09e012e003e01500a97eda5";

/// Sweet standard collection
pub const SWEET_STANDARD_COLLECTION_CODE: &str = "\
    b5ee9c7241021401000255000114ff00f4a413f4bcf2c80b01020162020d0202cc030c020120040904edd10638048adf\
    000e8698180b8d848adf07d201800e98fe99ff6a2687d20699fea6a6a184108349e9ca829405d47141baf8280e841085\
    4658056b84008646582a802e78b127d010a65b509e58fe59f80e78b64c0207d80701b28b9e382f970c8b8a9305d71813\
    929305d718139a9305d7181181aba0a5d405060708006635547000ba20997a5230ba93f2c18fdede04fa00d4302859f0\
    08028e1201a44343c85005cf1613cb3fccccccc9ed54925f05e200a6357003d4308e378040f4966fa5208e2906a45304\
    a07aba93f2c18fde81019321a05325bbf2f402fa00d43022544b30f00823ba9302a402de04926c21e2b3e63032504443\
    13c85005cf1613cb3fccccccc9ed540052323401fa40302020d749c10292307095d30130c300e2f2e1954144c85005cf\
    1613cb3fccccccc9ed5400628e28d421d0d749830bbbf2e25bd43020d0d749830cbbf2e25d103458c85005cf1613cb3f\
    ccccccc9ed54e05f04840ff2f00201580a0b002d007232cffe0a33c5b25c083232c044fd003d0032c03260001b3e401d\
    3232c084b281f2fff274200051d90686ba4c185ddf9712cad78033810f803bbc00c646582ac678b28027d0109e5b5896\
    66664b8fd8040201200e130201200f100043b8b5d31ed44d0fa40d33fd4d4d43010245f04d0d431d430d071c8cb0701c\
    f16ccc980201201112002fb5dafda89a1f481a67fa9a9a860d883a1a61fa61ff480610002db4f47da89a1f481a67fa9a\
    9a86028be09e00ce003e00f00025bc82df6a2687d20699fea6a6a182de86a182c49d2cb760";

/// Soulbound collection
pub const SOULBOUND_COLLECTION_CODE: &str = "\
    b5ee9c724102140100021f000114ff00f4a413f4bcf2c80b0102016202030202cd04050201200e0f04e7d10638048adf\
    000e8698180b8d848adf07d201800e98fe99ff6a2687d20699fea6a6a184108349e9ca829405d47141baf8280e841085\
    4658056b84008646582a802e78b127d010a65b509e58fe59f80e78b64c0207d80701b28b9e382f970c892e000f18112e\
    001718112e001f181181981e0024060708090201200a0b00603502d33f5313bbf2e1925313ba01fa00d43028103459f0\
    068e1201a44343c85005cf1613cb3fccccccc9ed54925f05e200a6357003d4308e378040f4966fa5208e2906a4208100\
    fabe93f2c18fde81019321a05325bbf2f402fa00d43022544b30f00623ba9302a402de04926c21e2b3e6303250444313\
    c85005cf1613cb3fccccccc9ed54002c323401fa40304144c85005cf1613cb3fccccccc9ed54003c8e15d4d430103441\
    30c85005cf1613cb3fccccccc9ed54e05f04840ff2f00201200c0d003d45af0047021f005778018c8cb0558cf165004f\
    a0213cb6b12ccccc971fb008002d007232cffe0a33c5b25c083232c044fd003d0032c03260001b3e401d3232c084b281\
    f2fff2742002012010110025bc82df6a2687d20699fea6a6a182de86a182c40043b8b5d31ed44d0fa40d33fd4d4d4301\
    0245f04d0d431d430d071c8cb0701cf16ccc980201201213002fb5dafda89a1f481a67fa9a9a860d883a1a61fa61ff48\
    0610002db4f47da89a1f481a67fa9a9a86028be09e008e003e00b01a500c6e";

/// Soulbound collection with modified content layout and balance return
pub const SOULBOUND_MODIFIED_COLLECTION_CODE: &str = "\
    b5ee9c72410216010002f8000114ff00f4a413f4bcf2c80b0102016202030202cc04050201200e0f02f7d90638048adf\
    000e8698180b8d848adf07d201800e98fe99ff6a2687d20699fa9906380e0004a187d2000ef00ea6a6a182a814108349\
    e9ca829485d47148b2f83360968410854658056b84008646582a802e78b127d010a65b509e58fe59f80e78b64c0207d8\
    07029cae382a9d0e382d8f970c8946000f181146001406070201480a0b007037373703d33f5312bbf2e1925312ba01fa\
    00d43029103459f00b8e18a45044451503c85006cf1614cb3f12cccccc01cf16c9ed54925f06e202fc8e753737377004\
    d45350c701c0009430d201309131e28e45018040f4966fa524c0ff25c001b193315250de208e2908a4208100fabe93f2\
    c18fde81019321a05327bbf2f402fa00d43022544d30f00b25ba9304a404de06926c21e2b312e65b335044451503c850\
    06cf1614cb3f12cccccc01cf16c9ed54e028c003e302280809005030363606810fa103c70512f2f401fa403054230550\
    33c85006cf1614cb3f12cccccc01cf16c9ed5400eec0048e20313235353501d4d4301025440302c85006cf1614cb3f12\
    cccccc01cf16c9ed54e03027c0058e235f06708018c8cb055004cf1623fa0213cb6acb1fcb3f820afaf08070fb02c983\
    06fb00e0363705c0068e1a02fa403045501413c85006cf1614cb3f12cccccc01cf16c9ed54e05f06840ff2f0002d501c\
    8cb3ff828cf16c97020c8cb0113f400f400cb00c980201200c0d001b3e401d3232c084b281f2fff27420003d16bc025c\
    087c029de0063232c15633c594013e8084f2dac4b333325c7ec0200201201011003fbc82df6a2687d20699fa9906380e\
    0004a187d2000ef00ea6a6a182a812f81ac40007b8b5d31802012012130201661415004db4f47da89a1f481a67ea6418\
    e0380012861f48003bc03a9a9a860aa04204abe0be012e003e0150003caa15ed44d0fa40d33f5320c701c0009430fa40\
    01de01d4d4d43055026c51004eaad7ed44d0fa40d33f5320c701c0009430fa4001de01d4d4d4305502155f05d0d30fd3\
    0ffa403001d8a761";

/// Sweet soulbound collection
pub const SWEET_SOULBOUND_COLLECTION_CODE: &str = "\
    b5ee9c72410211010001cd000114ff00f4a413f4bcf2c80b01020162020c0202cc030b020120040803f5d10638048adf\
    000e8698180b8d848adf07d201800e98fe99f98f6a2687d20699fea6a1828b1e382f970c8b8a9285d471e1a2a38005d1\
    04cbd29185d49f960c7ef6f026a10e86ba4c185ddf970cb7d00181381780401470880d22001e42802678b09659fe6666\
    4f6aa492f8271703929285d71813a0add71812f82c05060700b4347003d4308e418040f4966fa5208e3306a45304a07a\
    ba93f2c18fde81019321a05325bbf2f402d421d0d749830bbbf2e196fa003022544a03f00823ba9302a402de04926c21\
    e2b3e630325023c85004cf1612cb3fccccc9ed54004e03d0d431d4d102d43020d0d749830bbbf2e196c8cc12ccc95003\
    c85004cf1612cb3fccccc9ed540008840ff2f0020158090a002d007232cffe0a33c5b25c083232c044fd003d0032c032\
    60001b3e401d3232c084b281f2fff27420003ddad78033810f803bbc00c646582ac678b28027d0109e5b589666664b8f\
    d8040201200d100201200e0f003fb8b5d31ed44d0fa40d33fd4d430135f03d0d431d430d071c8cb0701cf16ccc980029\
    ba7a3ed44d0fa40d33fd4d4306c31f0067001f00780023bc82df6a2687d20699fea6a1818686a182c496828576";

/// Editable collection
pub const EDITABLE_COLLECTION_CODE: &str = "\
    b5ee9c72410216010002f8000114ff00f4a413f4bcf2c80b0102016202030202cc04050201200e0f02f7d90638048adf\
    000e8698180b8d848adf07d201800e98fe99ff6a2687d20699fa9906380e0004a187d2000ef00ea6a6a182a814108349\
    e9ca829485d47148b2f83360968410854658056b84008646582a802e78b127d010a65b509e58fe59f80e78b64c0207d8\
    07029cae382a9d0e382d8f970c8946000f181146001406070201480a0b007037373703d33f5312bbf2e1925312ba01fa\
    00d43029103459f00b8e18a45044451503c85006cf1614cb3f12cccccc01cf16c9ed54925f06e202fc8e753737377004\
    d45350c701c0009430d201309131e28e45018040f4966fa524c0ff25c001b193315250de208e2908a4208100fabe93f2\
    c18fde81019321a05327bbf2f402fa00d43022544d30f00b25ba9304a404de06926c21e2b312e65b335044451503c850\
    06cf1614cb3f12cccccc01cf16c9ed54e028c003e302280809005030363606810fa103c70512f2f401fa403054230550\
    33c85006cf1614cb3f12cccccc01cf16c9ed5400eec0048e20313235353501d4d4301025440302c85006cf1614cb3f12\
    cccccc01cf16c9ed54e03027c0058e235f06708018c8cb055004cf1623fa0213cb6acb1fcb3f820afaf08070fb02c983\
    06fb00e0363705c0068e1a02fa403045501413c85006cf1614cb3f12cccccc01cf16c9ed54e05f06840ff2f0002d501c\
    8cb3ff828cf16c97020c8cb0113f400f400cb00c980201200c0d001b3e401d3232c084b281f2fff27420003d16bc025c\
    087c029de0063232c15633c594013e8084f2dac4b333325c7ec0200201201011003fbc82df6a2687d20699fa9906380e\
    0004a187d2000ef00ea6a6a182a812f81ac40007b8b5d31802012012130201661415004db4f47da89a1f481a67ea6418\
    e0380012861f48003bc03a9a9a860aa04204abe0be012e003e0150003caa15ed44d0fa40d33f5320c701c0009430fa40\
    01de01d4d4d43055026c51004eaad7ed44d0fa40d33f5320c701c0009430fa4001de01d4d4d4305502155f05d0d30fd3\
    0ffa403001d8a761";

/// Standard NFT item
pub const NFT_STANDARD_ITEM_CODE: &str = "\
    b5ee9c7241020e01000229000114ff00f4a413f4bcf2c80b0102016202030202cc04050009a11f9fe00f020120060700\
    1dd81e4659fac678b00e78b6664f6aa403b9d1910e380492f81f068698180b8d8492f81f07d207d2018fd0018b8eb90f\
    d0018fd001839d4da0078038259f18103698fe99fc1082fe61e8a29185d474499081baf192009ed9e70181a1a1a9ac10\
    817e59351095d71812f824207f978408090a0201580c0d00ca306c22345232c705f2e19501fa40d45423405235f00821\
    c701c0008e4401fa00218e3a821005138d9170c85006cf1658cf161034413073708010c8cb055007cf165005fa0215cb\
    6a12cb1fcb3f226eb39458cf17019132e201c901fb00925f04e2925f03e201f65135c705f2e191fa4021f006fa40d200\
    31fa00820afaf0801ba121945315a0a1de22d70b01c300209206a19136e220c2fff2e192218e3e821005138d91c85009\
    cf16500bcf16712449145446a0708010c8cb055007cf165005fa0215cb6a12cb1fcb3f226eb39458cf17019132e201c9\
    01fb00104794102a375be20b00727082108b77173505c8cbff5004cf1610248040708010c8cb055007cf165005fa0215\
    cb6a12cb1fcb3f226eb39458cf17019132e201c901fb000082028e3526f0068210d53276db103744006d71708010c8cb\
    055007cf165005fa0215cb6a12cb1fcb3f226eb39458cf17019132e201c901fb0093303234e25502f00800113e910c1c\
    2ebcb85360003b3b513434cffe900835d27080269fc07e90350c04090408f80c1c165b5b60d746cf95";
